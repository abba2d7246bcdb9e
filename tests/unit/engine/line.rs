//! Tests for single-line slide and merge rules

#[cfg(test)]
mod tests {
    use slide2048::engine::line::{LineCompaction, compact_line};

    // Tests that an empty line stays empty and scores nothing
    #[test]
    fn test_compact_all_zero_line() {
        assert_eq!(
            compact_line([0, 0, 0, 0]),
            LineCompaction {
                values: [0, 0, 0, 0],
                score: 0
            }
        );
    }

    // Tests sliding without merges keeps relative order
    #[test]
    fn test_compact_slides_without_merging_distinct_tiles() {
        let result = compact_line([0, 2, 0, 4]);
        assert_eq!(result.values, [2, 4, 0, 0]);
        assert_eq!(result.score, 0);

        let result = compact_line([8, 4, 2, 16]);
        assert_eq!(result.values, [8, 4, 2, 16]);
        assert_eq!(result.score, 0);
    }

    // Tests equal tiles separated by gaps still merge
    #[test]
    fn test_compact_merges_across_gaps() {
        let result = compact_line([0, 2, 0, 2]);
        assert_eq!(result.values, [4, 0, 0, 0]);
        assert_eq!(result.score, 4);
    }

    // Tests that merged tiles do not merge again within the same pass
    #[test]
    fn test_compact_does_not_chain_merges() {
        let result = compact_line([2, 2, 2, 2]);
        assert_eq!(result.values, [4, 4, 0, 0]);
        assert_eq!(result.score, 8);

        let result = compact_line([4, 2, 2, 0]);
        assert_eq!(result.values, [4, 4, 0, 0]);
        assert_eq!(result.score, 4);
    }

    // Tests that three equal tiles merge only the leading pair
    #[test]
    fn test_compact_three_equal_merges_front_pair() {
        let result = compact_line([2, 2, 2, 0]);
        assert_eq!(result.values, [4, 2, 0, 0]);
        assert_eq!(result.score, 4);

        let result = compact_line([0, 8, 8, 8]);
        assert_eq!(result.values, [16, 8, 0, 0]);
        assert_eq!(result.score, 16);
    }

    // Tests two independent merges in one line
    #[test]
    fn test_compact_two_different_pairs() {
        let result = compact_line([4, 4, 8, 8]);
        assert_eq!(result.values, [8, 16, 0, 0]);
        assert_eq!(result.score, 24);
    }

    // Tests that tile sum is preserved and score counts each merged tile
    #[test]
    fn test_compact_preserves_tile_sum() {
        for line in [[2, 2, 4, 4], [0, 16, 16, 2], [1024, 1024, 0, 0], [2, 4, 8, 16]] {
            let result = compact_line(line);
            let before: u32 = line.iter().sum();
            let after: u32 = result.values.iter().sum();
            assert_eq!(before, after, "sum changed for {line:?}");
        }
    }
}
