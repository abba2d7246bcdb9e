//! Repository layout checks: every source file has a mirrored unit test file

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files don't require separate test files
    fn is_organizational(relative_path: &str) -> bool {
        relative_path == "main.rs"
            || relative_path == "lib.rs"
            || relative_path.ends_with("mod.rs")
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = collect_relative_paths(Path::new("src")).unwrap_or_default();
        let test_paths = collect_relative_paths(Path::new("tests/unit")).unwrap_or_default();
        assert!(!src_paths.is_empty(), "Failed to read src directory");

        let mut missing_tests: Vec<_> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();
        missing_tests.sort();

        assert!(
            missing_tests.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing_tests.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = collect_relative_paths(Path::new("src")).unwrap_or_default();
        let test_paths = collect_relative_paths(Path::new("tests/unit")).unwrap_or_default();

        let mut orphaned_tests: Vec<_> = test_paths
            .iter()
            .filter(|path| !is_organizational(path) && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();
        orphaned_tests.sort();

        assert!(
            orphaned_tests.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned_tests.join("\n")
        );
    }

    #[test]
    fn test_all_unit_test_files_contain_tests() {
        let base = Path::new("tests/unit");
        let test_paths = collect_relative_paths(base).unwrap_or_default();

        let mut files_without_tests: Vec<_> = test_paths
            .iter()
            .filter(|path| path.ends_with(".rs") && !is_organizational(path))
            .filter(|path| {
                fs::read_to_string(base.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/unit/{path}"))
            .collect();
        files_without_tests.sort();

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn collect_relative_paths(base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();
        collect_into(base, base, &mut paths)?;
        Ok(paths)
    }

    fn collect_into(
        dir: &Path,
        base: &Path,
        paths: &mut HashSet<String>,
    ) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let relative_path = path
                .strip_prefix(base)
                .map_err(|_stripped| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative_path);
                collect_into(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }

        Ok(())
    }
}
