mod cli;

use clap::Parser;
use tracing::{error, info, Level};

use lexnorm::engine::Normalizer;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mut normalizer = Normalizer::default();

    match normalizer.normalize_file(&cli.path) {
        Ok(output) => {
            let stats = normalizer.stats();
            info!(
                "normalized {} lines ({} blank skipped, {} duplicates merged) into {}",
                stats.parsed(),
                stats.skipped(),
                stats.merged(),
                output.display()
            );
        }
        Err(error) => {
            error!("{error}");
            std::process::exit(1);
        }
    }
}
