extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),
}

/// Configuration error: failures opening the input.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("File I/O Error: {0}")]
    File(io::ErrorKind),
}

/// I/O errors raised while reading or writing.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("Reader Error: {0}")]
    Reader(io::ErrorKind),

    #[error("Writer Error: {0}")]
    Writer(io::ErrorKind),
}
