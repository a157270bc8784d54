//! Offline conversion of a lexical-database dump into the distribution format.
//!
//! Each dump line looks like `<header fields...> | <gloss>`. The header is
//! whitespace separated and the word sits at [`HeaderLayout::word_index`].
//! Lines starting with whitespace are license/comment text and are ignored.
//! Synonym relations are not extracted; every entry gets an empty list.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use tracing::{info, warn};

use crate::config::{ConvertConfig, HeaderLayout, OnShortHeader};
use crate::entry::WordEntry;
use crate::error::DictError;

/// Parsed entries plus counters from one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    /// Entries in input line order.
    pub entries: Vec<WordEntry>,
    /// Lines read, including ignored ones.
    pub lines: usize,
    /// Lines dropped for having a short header.
    pub skipped: usize,
}

/// Parse one dump line.
///
/// Returns `Ok(None)` for comment lines and lines without a `|` separator.
pub fn parse_line(line: &str, layout: &HeaderLayout) -> Result<Option<WordEntry>, DictError> {
    if line.starts_with(char::is_whitespace) {
        return Ok(None);
    }
    let Some((header, gloss)) = line.split_once('|') else {
        return Ok(None);
    };
    let fields: Vec<&str> = header.split_whitespace().collect();
    let Some(word) = fields.get(layout.word_index) else {
        return Err(DictError::Format {
            line: None,
            found: fields.len(),
            required: layout.min_fields(),
        });
    };
    Ok(Some(WordEntry::new(*word, gloss.trim())))
}

/// Scan a whole dump, preserving line order.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the line.
pub fn parse_lexical_dump<R: BufRead>(
    reader: R,
    config: &ConvertConfig,
) -> Result<ConvertReport, DictError> {
    let mut report = ConvertReport::default();
    for (idx, raw) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        let mut raw = raw.map_err(|e| DictError::io_at(&config.input, e))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = String::from_utf8_lossy(&raw);
        report.lines += 1;
        match parse_line(&line, &config.layout) {
            Ok(Some(entry)) => report.entries.push(entry),
            Ok(None) => {}
            Err(err) => {
                let err = err.at_line(line_no);
                match config.on_short_header {
                    OnShortHeader::Abort => return Err(err),
                    OnShortHeader::Skip => {
                        warn!("skipping line: {err}");
                        report.skipped += 1;
                    }
                }
            }
        }
    }
    Ok(report)
}

/// Serialize entries as an indented JSON array followed by a newline.
pub fn write_entries<W: Write>(entries: &[WordEntry], writer: W) -> Result<(), DictError> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, entries).map_err(io::Error::from)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read `config.input`, convert it and write `config.output`.
///
/// The output file is only created once the whole input parsed.
pub fn convert_file(config: &ConvertConfig) -> Result<ConvertReport, DictError> {
    config.validate()?;
    let report = {
        let file = File::open(&config.input).map_err(|e| DictError::io_at(&config.input, e))?;
        parse_lexical_dump(BufReader::new(file), config)?
    };
    info!(
        input = %config.input.display(),
        lines = report.lines,
        entries = report.entries.len(),
        skipped = report.skipped,
        "parsed lexical dump"
    );

    let out = File::create(&config.output).map_err(|e| DictError::io_at(&config.output, e))?;
    write_entries(&report.entries, out).map_err(|e| match e {
        DictError::Io { path: None, source } => DictError::io_at(&config.output, source),
        other => other,
    })?;
    info!(output = %config.output.display(), "wrote distribution file");
    Ok(report)
}
