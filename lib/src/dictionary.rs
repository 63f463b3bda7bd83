extern crate hashbrown;

use std::slice::Iter;

use hashbrown::hash_map::HashMap;

/// Ordered definitions collected for one headword.
///
/// Definitions keep first-seen order. Duplicates and empty strings are
/// preserved as-is; every occurrence of a headword contributes exactly one
/// slot.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Definitions {
    entries: Vec<String>,
}

impl Definitions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, definition: String) {
        self.entries.push(definition);
    }

    /// Number of definition slots, empty strings included.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.entries.iter()
    }

    #[inline]
    pub fn join(&self, separator: &str) -> String {
        self.entries.join(separator)
    }
}

impl From<Vec<String>> for Definitions {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

#[macro_export]
macro_rules! defs {
    ( $( $definition:expr ),* $(,)? ) => {
        $crate::dictionary::Definitions::from(vec![
            $( String::from($definition) ),*
        ])
    };
}

/// Headword to definitions mapping, built fresh per run.
///
/// Key insertion order is irrelevant; serialization re-sorts.
#[derive(Debug, Default)]
pub struct Dictionary {
    inner: HashMap<String, Definitions>,
}

impl Dictionary {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Appends `definition` under `headword`, creating the entry on first
    /// sight. Returns the slot count for the headword after the append.
    pub fn add<S: AsRef<str>>(&mut self, headword: S, definition: String) -> usize {
        let definitions = self.inner.entry_ref(headword.as_ref()).or_default();
        definitions.push(definition);
        definitions.count()
    }

    #[inline]
    pub fn get(&self, headword: &str) -> Option<&Definitions> {
        self.inner.get(headword)
    }

    /// Number of distinct headwords.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Consumes the dictionary into entries sorted by headword, ascending
    /// over the headword's character sequence.
    pub fn into_sorted(self) -> Vec<(String, Definitions)> {
        let mut entries = self.inner.into_iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;
    use crate::defs;

    #[test]
    fn test_dictionary_accumulates_duplicates() {
        let mut dictionary = Dictionary::new();

        dictionary.add("cat", String::from("a small feline"));
        dictionary.add("dog", String::from("a loyal animal"));
        dictionary.add("cat", String::from("wildcat relative"));

        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.get("cat"),
            Some(&defs!["a small feline", "wildcat relative"])
        );
        assert_eq!(dictionary.get("dog"), Some(&defs!["a loyal animal"]));
        assert_eq!(dictionary.get("bird"), None);
    }

    #[test]
    fn test_dictionary_add_returns_slot_count() {
        let mut dictionary = Dictionary::new();

        assert_eq!(dictionary.add("cat", String::new()), 1);
        assert_eq!(dictionary.add("cat", String::new()), 2);
        assert_eq!(dictionary.add("dog", String::new()), 1);
    }

    #[test]
    fn test_dictionary_preserves_empty_and_duplicate_definitions() {
        let mut dictionary = Dictionary::new();

        dictionary.add("cat", String::from("feline"));
        dictionary.add("cat", String::new());
        dictionary.add("cat", String::from("feline"));

        assert_eq!(dictionary.get("cat"), Some(&defs!["feline", "", "feline"]));
    }

    #[test]
    fn test_dictionary_into_sorted() {
        let mut dictionary = Dictionary::new();

        dictionary.add("dog", String::from("a loyal animal"));
        dictionary.add("bird", String::new());
        dictionary.add("cat", String::from("a small feline"));

        let entries = dictionary.into_sorted();
        let headwords = entries
            .iter()
            .map(|(headword, _)| headword.as_str())
            .collect::<Vec<_>>();

        assert_eq!(headwords, vec!["bird", "cat", "dog"]);
    }

    #[test]
    fn test_definitions_join() {
        let definitions = defs!["a small feline", "wildcat relative"];

        assert_eq!(definitions.count(), 2);
        assert_eq!(
            definitions.join(" / "),
            "a small feline / wildcat relative"
        );
    }

    #[test]
    fn test_definitions_join_single_empty() {
        let definitions = defs![""];

        assert_eq!(definitions.count(), 1);
        assert_eq!(definitions.join(" / "), "");
    }
}
