//! RIS format parsing implementation.
//!
//! This module handles the low-level parsing of RIS formatted text: splitting
//! the text into references at `ER` lines, reading each line as a tag/value
//! pair and deriving the record aliases.

use crate::ris::classify::classify;
use crate::ris::structure::Record;
use crate::ris::tags::{AUTHOR_TAGS, RisTag};
use crate::utils::title_case;
use tracing::{debug, trace};

/// Parse the content of a RIS formatted file into records, in input order.
///
/// References without a single readable tag are dropped.
pub(crate) fn ris_parse<S: AsRef<str>>(ris_text: S) -> Vec<Record> {
    ReferenceSplit::new(ris_text.as_ref())
        .filter_map(|(line_number, raw)| {
            let record = parse_reference(line_number, raw);
            if record.is_empty() {
                trace!(line = line_number, "skipping reference without tags");
                None
            } else {
                debug!(
                    id = %record.id,
                    classification = %record.classification,
                    fields = record.len(),
                    "parsed reference"
                );
                Some(record)
            }
        })
        .collect()
}

/// Build one record from the raw text of a single reference.
fn parse_reference(first_line: usize, raw: &str) -> Record {
    let mut record = Record::new(classify(raw));

    for (offset, line) in raw.lines().enumerate() {
        let line_number = first_line + offset;
        let line = line.trim();

        if let Some(reason) = skip_reason(line) {
            trace!(line = line_number, reason, "skipping line");
            continue;
        }
        if is_end_marker(line) {
            continue;
        }

        match parse_ris_line(line) {
            Ok((tag, content)) => record.add_data(RisTag::from_tag(tag), content.to_string()),
            Err(reason) => {
                trace!(line = line_number, reason, "ignoring line");
                record.add_ignored_line(line_number, line.to_string());
            }
        }
    }

    for tag in &AUTHOR_TAGS {
        if let Some(value) = record.field_mut(tag) {
            value.map_values(title_case);
        }
    }
    record.derive_aliases();
    record
}

/// Split a line on its first `-` into a trimmed tag and a trimmed value.
///
/// Hyphens after the first one belong to the value.
fn parse_ris_line(line: &str) -> Result<(&str, &str), &'static str> {
    let (tag, content) = line.split_once('-').ok_or("missing separator")?;
    let tag = tag.trim();
    if tag.is_empty() {
        return Err("empty tag");
    }
    Ok((tag, content.trim()))
}

/// Read a raw line as a tag/value pair, `None` for comments and malformed lines.
pub(crate) fn split_tag_value(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.starts_with('#') {
        return None;
    }
    parse_ris_line(line).ok()
}

/// Check if a line is export metadata that should be ignored.
fn is_metadata_line(line: &str) -> bool {
    line.starts_with("Record #")
        || line.starts_with("Provider:")
        || line.starts_with("Content:")
        || line.starts_with("Database:")
}

/// Why a line carries no data, `None` for lines that should be tokenized.
fn skip_reason(line: &str) -> Option<&'static str> {
    if line.is_empty() {
        Some("blank")
    } else if line.starts_with('#') {
        Some("comment")
    } else if is_metadata_line(line) {
        Some("export metadata")
    } else {
        None
    }
}

/// `ER` with or without a separator and value.
fn is_end_marker(line: &str) -> bool {
    line.trim() == "ER" || matches!(split_tag_value(line), Some(("ER", _)))
}

/// An [Iterator] which inclusively splits RIS text after each `ER` line.
///
/// [Iterator::next] returns the text of one reference, including its end
/// marker line, along with its starting line number. Text after the last end
/// marker is returned as a final chunk.
pub(crate) struct ReferenceSplit<'a> {
    line_number: usize,
    text: &'a str,
}

impl<'a> ReferenceSplit<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            line_number: 1,
            text,
        }
    }
}

impl<'a> Iterator for ReferenceSplit<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.text.is_empty() {
            return None;
        }
        let mut i = 0;
        let mut lines = 0;
        for line in self.text.split_inclusive('\n') {
            lines += 1;
            i += line.len();
            if is_end_marker(line) {
                break;
            }
        }
        let (part, rest) = self.text.split_at(i);
        let line_number = self.line_number;
        self.text = rest;
        self.line_number += lines;
        Some((line_number, part))
    }
}
