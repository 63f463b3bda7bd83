use std::{
    fmt::{Display, Formatter},
    ops::Deref,
    str::Split,
};

/// Full text content of one input file.
#[derive(Debug, Default)]
pub struct Document(String);

impl Document {
    #[inline]
    pub fn new(text: String) -> Self {
        Self(text)
    }

    #[inline]
    pub fn inner(&self) -> &String {
        &self.0
    }

    /// Raw input lines, split on the newline character.
    ///
    /// A trailing newline produces one empty final line; the splitter
    /// skips it like any other blank line.
    #[inline]
    pub fn lines(&self) -> Split<'_, char> {
        self.0.split('\n')
    }
}

impl From<String> for Document {
    #[inline]
    fn from(buffer: String) -> Self {
        Document(buffer)
    }
}

impl From<&str> for Document {
    #[inline]
    fn from(buffer: &str) -> Self {
        Document(String::from(buffer))
    }
}

impl Deref for Document {
    type Target = String;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.inner()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn test_document_lines() {
        let document = Document::from("cat a small feline\nbird\n");
        let lines = document.lines().collect::<Vec<_>>();

        assert_eq!(lines, vec!["cat a small feline", "bird", ""]);
    }

    #[test]
    fn test_document_empty() {
        let document = Document::default();
        let lines = document.lines().collect::<Vec<_>>();

        assert_eq!(lines, vec![""]);
    }
}
