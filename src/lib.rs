//! Word lookup over a precompiled dictionary, plus the offline converter
//! that produces the dictionary from a lexical-database dump.

pub mod config;
pub mod convert;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod io_utils;
pub mod logging;
pub mod query;

pub use config::{ConvertConfig, HeaderLayout, OnShortHeader};
pub use convert::{convert_file, parse_lexical_dump, parse_line, write_entries, ConvertReport};
pub use dictionary::{Dictionary, EMBEDDED_DICTIONARY};
pub use entry::{normalize, WordEntry};
pub use error::DictError;
pub use query::{query, respond, write_outcome, QueryOutcome};

/// Usage line printed when no word is given.
pub const USAGE: &str = "Usage: dicttool <word_to_search>";

/// Process exit codes of the `dicttool` binary.
pub mod exit_code {
    pub const FOUND: i32 = 0;
    pub const NOT_FOUND: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const LOAD_FAILED: i32 = 3;
    pub const WRITE_FAILED: i32 = 4;
}
