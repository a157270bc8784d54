use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    /// Distribution bytes are not a JSON array of word entries.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Propagated I/O error, with the file involved when known.
    #[error("{}", io_message(.path, .source))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    /// A dump line whose header has too few whitespace-separated fields.
    #[error("{}", format_message(.line, .found, .required))]
    Format {
        line: Option<usize>,
        found: usize,
        required: usize,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

impl DictError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io_at(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DictError::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Attach a 1-based line number to a format error.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            DictError::Format {
                found, required, ..
            } => DictError::Format {
                line: Some(line),
                found,
                required,
            },
            other => other,
        }
    }
}

impl From<io::Error> for DictError {
    fn from(source: io::Error) -> Self {
        DictError::Io { path: None, source }
    }
}

fn io_message(path: &Option<PathBuf>, source: &io::Error) -> String {
    match path {
        Some(p) => format!("I/O error on '{}': {source}", p.display()),
        None => format!("I/O error: {source}"),
    }
}

fn format_message(line: &Option<usize>, found: &usize, required: &usize) -> String {
    match line {
        Some(n) => format!(
            "format error on line {n}: header has {found} fields, need at least {required}"
        ),
        None => format!("format error: header has {found} fields, need at least {required}"),
    }
}
