use std::path::PathBuf;

use crate::error::DictError;

/// Input file the converter reads when none is given.
pub const DEFAULT_INPUT: &str = "data.noun";
/// Output file the converter writes when none is given.
pub const DEFAULT_OUTPUT: &str = "dictionary.json";
/// Header position of the first word in a WordNet data line:
/// `synset_offset lex_filenum ss_type w_cnt word ...`.
pub const DEFAULT_WORD_INDEX: usize = 4;

/// Field positions within the whitespace-separated header of a dump line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Zero-based header field holding the word.
    pub word_index: usize,
}

impl HeaderLayout {
    pub fn new(word_index: usize) -> Self {
        Self { word_index }
    }

    /// Fewest header fields a line needs for the word to be present.
    pub fn min_fields(&self) -> usize {
        self.word_index.saturating_add(1)
    }
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_INDEX)
    }
}

/// What the converter does with a line whose header is too short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnShortHeader {
    /// Drop the line, log a warning and keep going.
    #[default]
    Skip,
    /// Stop the conversion with a format error.
    Abort,
}

/// Runtime configuration for the offline converter.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: HeaderLayout,
    pub on_short_header: OnShortHeader,
}

impl ConvertConfig {
    /// Reject configurations that would read and write the same file.
    pub fn validate(&self) -> Result<(), DictError> {
        if self.input == self.output {
            return Err(DictError::Config(format!(
                "input and output are both '{}'",
                self.input.display()
            )));
        }
        Ok(())
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            layout: HeaderLayout::default(),
            on_short_header: OnShortHeader::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_filenames() {
        let cfg = ConvertConfig::default();
        assert_eq!(cfg.input, PathBuf::from("data.noun"));
        assert_eq!(cfg.output, PathBuf::from("dictionary.json"));
        assert_eq!(cfg.layout.min_fields(), 5);
        assert_eq!(cfg.on_short_header, OnShortHeader::Skip);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn huge_word_index_does_not_overflow() {
        assert_eq!(HeaderLayout::new(usize::MAX).min_fields(), usize::MAX);
    }

    #[test]
    fn same_input_and_output_rejected() {
        let cfg = ConvertConfig {
            output: PathBuf::from(DEFAULT_INPUT),
            ..ConvertConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(DictError::Config(_))));
    }
}
