//! Lowercase-keyed lookup table built from distribution-format bytes.
//!
//! The same decode path serves both the bytes compiled into the binary and
//! bytes read from a caller-supplied file.

use std::collections::hash_map::{HashMap, Values};
use std::path::Path;

use tracing::debug;

use crate::entry::{normalize, WordEntry};
use crate::error::DictError;

/// Distribution file bundled into the executable at build time.
pub static EMBEDDED_DICTIONARY: &[u8] = include_bytes!("../data/dictionary.json");

/// Immutable mapping from lowercased word to its entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, WordEntry>,
}

impl Dictionary {
    /// Build from entries in order. A later entry whose lowercased word
    /// collides with an earlier one replaces it.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let mut map = HashMap::new();
        let mut total = 0usize;
        for entry in entries {
            total += 1;
            map.insert(entry.key(), entry);
        }
        debug!(
            entries = total,
            keys = map.len(),
            collapsed = total - map.len(),
            "dictionary built"
        );
        Self { entries: map }
    }

    /// Decode a JSON array of word entries.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DictError> {
        let entries: Vec<WordEntry> = serde_json::from_slice(bytes)?;
        Ok(Self::from_entries(entries))
    }

    /// Decode the dictionary compiled into this binary.
    pub fn embedded() -> Result<Self, DictError> {
        Self::from_slice(EMBEDDED_DICTIONARY)
    }

    /// Read and decode a distribution file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| DictError::io_at(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read dictionary file");
        Self::from_slice(&bytes)
    }

    /// Case-insensitive lookup.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(&normalize(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> Values<'_, String, WordEntry> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a WordEntry;
    type IntoIter = Values<'a, String, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased_words() {
        let dict = Dictionary::from_slice(
            br#"[{"word":"Cat","definition":"x"},{"word":"DOG","definition":"y"}]"#,
        )
        .unwrap();
        for (key, entry) in &dict.entries {
            assert_eq!(key, &entry.word.to_lowercase());
        }
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn last_collision_wins() {
        let dict = Dictionary::from_slice(
            br#"[{"word":"run","definition":"first"},{"word":"RUN","definition":"second"}]"#,
        )
        .unwrap();
        assert_eq!(dict.len(), 1);
        let entry = dict.get("Run").unwrap();
        assert_eq!(entry.word, "RUN");
        assert_eq!(entry.definition, "second");
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = Dictionary::from_slice(b"[{\"word\":").unwrap_err();
        assert!(matches!(err, DictError::Decode(_)));
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        let err = Dictionary::from_slice(br#"{"word":"a","definition":"b"}"#).unwrap_err();
        assert!(matches!(err, DictError::Decode(_)));
    }

    #[test]
    fn empty_array_is_empty_dictionary() {
        let dict = Dictionary::from_slice(b"[]").unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn embedded_dictionary_decodes() {
        let dict = Dictionary::embedded().unwrap();
        assert!(!dict.is_empty());
        for entry in &dict {
            assert!(dict.contains(&entry.word));
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dictionary::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DictError::Io { path: Some(_), .. }));
    }

    #[test]
    fn file_and_slice_agree() {
        let bytes = br#"[{"word":"Cat","definition":"feline","synonyms":["kitty"]}]"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.json");
        std::fs::write(&path, bytes).unwrap();
        assert_eq!(
            Dictionary::load(&path).unwrap(),
            Dictionary::from_slice(bytes).unwrap()
        );
    }
}
