use std::fmt;
use std::io::{self, Write};

use tracing::error;

use crate::dictionary::Dictionary;
use crate::entry::{normalize, WordEntry};
use crate::exit_code;

/// Result of looking up one word. A miss is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    Found(&'a WordEntry),
    /// Carries the normalized query.
    NotFound(String),
}

impl QueryOutcome<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found(_))
    }
}

impl fmt::Display for QueryOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Found(entry) => {
                writeln!(f, "Word: {}", entry.word)?;
                writeln!(f, "Definition: {}", entry.definition)?;
                if !entry.synonyms.is_empty() {
                    writeln!(f, "Synonyms: {}", entry.synonyms.join(", "))?;
                }
                Ok(())
            }
            QueryOutcome::NotFound(word) => {
                writeln!(f, "Word '{word}' not found in dictionary.")
            }
        }
    }
}

/// Look up `word` after lowercasing it.
pub fn query<'a>(dict: &'a Dictionary, word: &str) -> QueryOutcome<'a> {
    let key = normalize(word);
    match dict.get(&key) {
        Some(entry) => QueryOutcome::Found(entry),
        None => QueryOutcome::NotFound(key),
    }
}

/// Write the formatted outcome and flush.
pub fn write_outcome<W: Write>(outcome: &QueryOutcome<'_>, mut out: W) -> io::Result<()> {
    write!(out, "{outcome}")?;
    out.flush()
}

/// Look up `word`, write the outcome to `out` and return the process exit code.
pub fn respond<W: Write>(dict: &Dictionary, word: &str, out: W) -> i32 {
    let outcome = query(dict, word);
    if let Err(e) = write_outcome(&outcome, out) {
        error!("writing result: {e}");
        return exit_code::WRITE_FAILED;
    }
    if outcome.is_found() {
        exit_code::FOUND
    } else {
        exit_code::NOT_FOUND
    }
}
