use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    dictionary::{Definitions, Dictionary},
    error::{Error, IoError},
};

const DEFINITION_SEPARATOR: &str = " / ";
const OUTPUT_SUFFIX: &str = "-out";

/// Renders the sorted dictionary and writes the output file.
#[derive(Clone, Debug, Default)]
pub struct Serializer;

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the dictionary as sorted output lines, each terminated by a
    /// single newline.
    pub fn render(&self, dictionary: Dictionary) -> String {
        let mut buffer = String::new();

        for (headword, definitions) in dictionary.into_sorted() {
            self.render_entry(&mut buffer, &headword, &definitions);
        }

        buffer
    }

    // A non-empty sequence always gets the separating space, even when the
    // join is empty: a headword whose only slot is the empty string renders
    // as `headword ` with a trailing space.
    fn render_entry(&self, buffer: &mut String, headword: &str, definitions: &Definitions) {
        buffer.push_str(headword);

        if !definitions.is_empty() {
            buffer.push(' ');
            buffer.push_str(&definitions.join(DEFINITION_SEPARATOR));
        }

        buffer.push('\n');
    }

    /// Output path: the input path with `-out` appended.
    pub fn output_path<P: AsRef<Path>>(&self, input: P) -> PathBuf {
        let mut path = input.as_ref().as_os_str().to_os_string();
        path.push(OUTPUT_SUFFIX);
        PathBuf::from(path)
    }

    /// Writes the rendered buffer in one shot, replacing any existing file.
    pub fn write<P: AsRef<Path>>(&self, path: P, contents: &str) -> Result<(), Error> {
        match fs::write(path, contents) {
            Ok(()) => Ok(()),
            Err(error) => Err(IoError::Writer(error.kind()).into()),
        }
    }
}
