extern crate clap;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "lexnorm", about = "Normalize a flat word-list/definition file")]
pub struct Cli {
    /// Path to the word-list file; output is written next to it as
    /// `<path>-out`.
    pub path: PathBuf,
}
