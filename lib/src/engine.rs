use std::path::{Path, PathBuf};

use crate::{
    dictionary::Dictionary,
    document::Document,
    error::Error,
    read::FileReader,
    splitter::Splitter,
    util::Counter,
    write::Serializer,
};

/// Line counters for one run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunStats {
    parsed: Counter<usize>,
    skipped: Counter<usize>,
    merged: Counter<usize>,
}

impl RunStats {
    /// Non-blank lines, each contributing one definition slot.
    #[inline]
    pub fn parsed(&self) -> usize {
        *self.parsed
    }

    /// Blank or whitespace-only lines.
    #[inline]
    pub fn skipped(&self) -> usize {
        *self.skipped
    }

    /// Lines that landed on an already-seen headword.
    #[inline]
    pub fn merged(&self) -> usize {
        *self.merged
    }
}

/// The normalizer pipeline: parse, aggregate, sort, serialize.
///
/// `run` operates on in-memory documents so the transform stays testable
/// without touching the filesystem; `normalize_file` is the thin file
/// adapter around it.
#[derive(Debug, Default)]
pub struct Normalizer {
    splitter: Splitter,
    serializer: Serializer,
    stats: RunStats,
}

impl Normalizer {
    pub fn new(splitter: Splitter) -> Self {
        Self {
            splitter,
            serializer: Serializer::new(),
            stats: RunStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Parses and aggregates a document into a dictionary.
    ///
    /// Every non-blank line contributes exactly one (headword, definition)
    /// pair; appends for a given headword follow input line order.
    pub fn run(&mut self, document: &Document) -> Dictionary {
        let mut dictionary = Dictionary::new();

        for line in document.lines() {
            match self.splitter.split(line) {
                Some(parsed) => {
                    let (headword, definition) = parsed.into_parts();

                    self.stats.parsed.increment();
                    if dictionary.add(headword.as_str(), definition) > 1 {
                        self.stats.merged.increment();
                    }
                }
                None => self.stats.skipped.increment(),
            }
        }

        dictionary
    }

    /// Renders a dictionary as the sorted output buffer.
    #[inline]
    pub fn render(&self, dictionary: Dictionary) -> String {
        self.serializer.render(dictionary)
    }

    /// One-shot transform: read `path`, aggregate, write `<path>-out`.
    ///
    /// The output file is opened only after the input has been fully read
    /// and aggregated, so a failed read leaves no output behind.
    pub fn normalize_file<P: AsRef<Path>>(&mut self, path: P) -> Result<PathBuf, Error> {
        let document = FileReader::read_document(&path)?;
        let dictionary = self.run(&document);
        let buffer = self.serializer.render(dictionary);

        let output = self.serializer.output_path(&path);
        self.serializer.write(&output, &buffer)?;

        Ok(output)
    }
}
