use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{
    document::Document,
    error::{ConfigError, Error, IoError},
};

/// Input file adapter.
///
/// The handle lives only as long as the reader; dropping it on any exit
/// path releases the file.
#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf) {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(ConfigError::File(error.kind()).into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_into(&mut self, buffer: &mut String) -> Result<(), Error> {
        match &mut self.inner {
            Some(reader) => match reader.read_to_string(buffer) {
                Ok(_) => Ok(()),
                Err(error) => Err(IoError::Reader(error.kind()).into()),
            },
            None => Err(IoError::Reader(std::io::ErrorKind::InvalidInput).into()),
        }
    }

    /// Reads the whole file at `path` into a document.
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document, Error> {
        let mut reader = Self::new();
        reader.open(path)?;

        let mut buffer = String::new();
        reader.read_into(&mut buffer)?;

        Ok(Document::from(buffer))
    }
}
