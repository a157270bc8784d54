use serde::{Deserialize, Deserializer, Serialize};

/// One lexical record of the distribution format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub definition: String,
    /// Absent or `null` in the JSON decodes as an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            synonyms: Vec::new(),
        }
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Lookup key for this entry.
    pub fn key(&self) -> String {
        normalize(&self.word)
    }
}

/// Normalization shared by dictionary keys and queries.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
