//! RIS format parser implementation.
//!
//! Parsing is best-effort: lines that are not tag/value pairs are kept on
//! the record as ignored lines, unknown tags are kept as they are, and a
//! reference made only of blank or unreadable lines is dropped.
//!
//! # Example
//!
//! ```
//! use chemcite::{Classification, RisParser};
//! use chemcite::ris::RisTag;
//!
//! let input = r#"TY  - JOUR
//! TI  - Example Title
//! AU  - Smith, John
//! AU  - Doe, Jane
//! ER  - "#;
//!
//! let records = RisParser::new().parse(input);
//! let record = records.current().unwrap();
//! assert_eq!(record.first(&RisTag::Title), Some("Example Title"));
//! assert_eq!(record.values(&RisTag::Author).count(), 2);
//! assert_eq!(record.classification, Classification::Journal);
//! ```

pub(crate) mod classify;
mod parse;
mod structure;
pub mod tags;

pub use classify::{Classification, classify};
pub use structure::{FieldValue, Record};
pub use tags::{ReferenceType, RisTag};

use crate::{ReferenceParser, Result};
use parse::ris_parse;
use std::ops::Deref;
use std::path::Path;

/// Parser for RIS format references.
///
/// RIS is a standardized format for bibliographic citations that uses two-letter
/// tags at the start of each line to denote different citation fields.
#[derive(Debug, Clone, Default)]
pub struct RisParser;

impl RisParser {
    /// Creates a new RIS parser instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use chemcite::RisParser;
    /// let parser = RisParser::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses a string containing one or more references in RIS format.
    pub fn parse(&self, input: &str) -> ReferenceCollection {
        ReferenceCollection {
            records: ris_parse(input),
        }
    }

    /// Reads a UTF-8 RIS file and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::Io`](crate::CitationError::Io) if the file cannot be read.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ReferenceCollection> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.parse(&text))
    }
}

impl ReferenceParser for RisParser {
    fn parse(&self, input: &str) -> ReferenceCollection {
        RisParser::parse(self, input)
    }
}

/// The records of one RIS text, in input order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCollection {
    records: Vec<Record>,
}

impl ReferenceCollection {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The most recently parsed record.
    pub fn current(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Deref for ReferenceCollection {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl IntoIterator for ReferenceCollection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_ris() {
        let input = r#"TY  - JOUR
TI  - Test Article Title
AU  - Smith, John
JO  - Test Journal
PY  - 2023
VL  - 10
IS  - 2
SP  - 100
EP  - 110
DO  - 10.1000/test
AB  - This is a test abstract.
KW  - Keyword1
KW  - Keyword2
ER  -

"#;
        let result = RisParser::new().parse(input);
        assert_eq!(result.len(), 1);
        let record = &result[0];
        assert_eq!(record.first(&RisTag::Type), Some("JOUR"));
        assert_eq!(record.first(&RisTag::Title), Some("Test Article Title"));
        assert_eq!(record.text(&RisTag::StartPage), "100");
        assert_eq!(record.values(&RisTag::Keywords).count(), 2);
        assert_eq!(
            record.alias("Type of reference (long)"),
            Some(&FieldValue::from("Journal"))
        );
    }

    #[test]
    fn test_parse_gs_format() {
        let input = r#"TY  - JOUR
T1  - Albendazole therapy in children with focal seizures and single small enhancing computerized tomographic lesions: a randomized, placebo-controlled, double blind trial
A1  - Baranwal, Arun K
A1  - Singhi, Pratibha D
JO  - The Pediatric infectious disease journal
VL  - 17
SP  - 696
EP  - 700
Y1  - 1998///
PB  - LWW
ER  -


TY  - JOUR
T1  - High-dose praziquantel with cimetidine for refractory neurocysticercosis: a case report with clinical and MRI follow-up.
A1  - Yee, Thomas
JO  - Western journal of medicine
VL  - 170
SP  - 112
Y1  - 1999
PB  - BMJ Publishing Group
ER  -

"#;
        let records = RisParser::new().parse(input);
        assert_eq!(records.len(), 2, "Expected 2 records in Google Scholar format");
        assert!(
            records[0]
                .text(&RisTag::TitleAlternative)
                .ends_with("placebo-controlled, double blind trial")
        );
        assert!(records[1].text(&RisTag::TitleAlternative).starts_with("High-dose"));
        assert_eq!(records.current().unwrap().text(&RisTag::DatePrimary), "1999");
    }

    #[test]
    fn test_current_is_last_non_empty_record() {
        let input = "TY  - JOUR\nTI  - First\nER  - \nTY  - BOOK\nTI  - Second\nER  - \n\n\nER  - \n";
        let records = RisParser::new().parse(input);
        assert_eq!(records.len(), 2);
        assert_eq!(records.current().unwrap().text(&RisTag::Title), "Second");
    }

    #[test]
    fn test_into_records_keeps_input_order() {
        let input = "TY  - JOUR\nTI  - First\nER  - \nTY  - BOOK\nTI  - Second\nER  - \n";
        let records = RisParser::new().parse(input);
        assert_eq!(records.records().len(), 2);
        let titles: Vec<String> = records
            .into_records()
            .into_iter()
            .map(|record| record.text(&RisTag::Title).to_string())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let records = RisParser::new().parse("");
        assert!(records.is_empty());
        assert!(records.current().is_none());
    }

    #[test]
    fn test_parse_file() {
        let path = std::env::temp_dir().join(format!("chemcite-{}.ris", nanoid::nanoid!()));
        std::fs::write(&path, "TY  - JOUR\nTI  - From Disk\nER  - \n").unwrap();
        let records = RisParser::new().parse_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(records[0].text(&RisTag::Title), "From Disk");
    }

    #[test]
    fn test_parse_missing_file() {
        let result = RisParser::new().parse_file("/nonexistent/chemcite/none.ris");
        assert!(matches!(result, Err(crate::CitationError::Io(_))));
    }
}
