use std::fmt;
use std::io;

use crate::DictError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

fn io_suggestion(err: &io::Error) -> &'static str {
    use io::ErrorKind::*;
    match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file contents are not in the expected format.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn dict_cli_error(context: &str, err: DictError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &DictError) -> String {
    match err {
        DictError::Decode(e) => format!("{e}. Expected a JSON array of word entries."),
        DictError::Io {
            path: Some(path),
            source,
        } => format!("'{}': {source}. {}", path.display(), io_suggestion(source)),
        DictError::Io { path: None, source } => format!("{source}. {}", io_suggestion(source)),
        DictError::Format { .. } => {
            format!("{err}. Check --word-index or drop --strict to skip such lines.")
        }
        DictError::Config(msg) => format!("{msg}. Invalid configuration."),
    }
}
