//! CLI entry point for the sliding-tile puzzle

use clap::Parser;
use slide2048::io::cli::{Cli, GameRunner};

fn main() -> slide2048::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    GameRunner::new(cli).run()
}
