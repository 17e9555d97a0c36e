//! Bibliographic metadata as returned by a DOI lookup service, and its
//! conversion into RIS text.
//!
//! # Example
//!
//! ```
//! use chemcite::{PersonName, WorkMetadata};
//!
//! let work = WorkMetadata {
//!     title: "Catalysis".to_string(),
//!     authors: vec![PersonName::new("Hans Peter", "Wurst")],
//!     year: Some(2020),
//!     container_title: Some("Angew. Chem.".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     work.to_ris(),
//!     "TY  - JOUR\nT1  - Catalysis\nAU  - Wurst, Hans Peter\nPY  - 2020\nJO  - Angew. Chem.\nER  -"
//! );
//! ```

use crate::ris::{Record, RisParser};
use crate::utils::normalize_doi;
use serde::{Deserialize, Serialize};

/// A person named in the metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// The given names
    #[serde(default)]
    pub given: String,
    /// The family name (surname)
    #[serde(default)]
    pub family: String,
}

impl PersonName {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: family.into(),
        }
    }

    /// The name as `"Family, Given"`, or just the family name when there are
    /// no given names.
    pub fn surname_first(&self) -> String {
        let family = self.family.trim();
        let given = self.given.trim();
        if given.is_empty() {
            family.to_string()
        } else {
            format!("{family}, {given}")
        }
    }
}

/// Metadata of one published work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkMetadata {
    pub title: String,
    pub authors: Vec<PersonName>,
    pub year: Option<i32>,
    /// Journal name
    pub container_title: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    /// Page or page range, written unchanged
    pub page: Option<String>,
    pub doi: Option<String>,
}

impl WorkMetadata {
    /// RIS text of a journal article, one tag per line, ending with `ER  -`.
    ///
    /// Absent and blank fields are left out; the DOI is normalized.
    pub fn to_ris(&self) -> String {
        let mut lines = vec!["TY  - JOUR".to_string()];

        push_line(&mut lines, "T1", &self.title);
        for author in &self.authors {
            push_line(&mut lines, "AU", &author.surname_first());
        }
        if let Some(year) = self.year {
            push_line(&mut lines, "PY", &year.to_string());
        }
        for (tag, value) in [
            ("JO", &self.container_title),
            ("VL", &self.volume),
            ("IS", &self.issue),
            ("SP", &self.page),
        ] {
            if let Some(value) = value {
                push_line(&mut lines, tag, value);
            }
        }
        if let Some(doi) = self.doi.as_deref().and_then(normalize_doi) {
            push_line(&mut lines, "DO", &doi);
        }

        lines.push("ER  -".to_string());
        lines.join("\n")
    }

    /// Parses [`to_ris`](Self::to_ris) back into a record.
    pub fn to_record(&self) -> Option<Record> {
        RisParser::new().parse(&self.to_ris()).into_iter().next()
    }
}

fn push_line(lines: &mut Vec<String>, tag: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        lines.push(format!("{tag}  - {value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ris::{Classification, RisTag};
    use crate::style::{AngewandteStyle, CitationStyle};
    use pretty_assertions::assert_eq;

    fn sample() -> WorkMetadata {
        WorkMetadata {
            title: "Light-Driven Catalysis".to_string(),
            authors: vec![
                PersonName::new("Hans Peter", "Wurst"),
                PersonName::new("Jane", "Doe"),
            ],
            year: Some(2020),
            container_title: Some("Angew. Chem. Int. Ed.".to_string()),
            volume: Some("59".to_string()),
            issue: Some("12".to_string()),
            page: Some("1234-1240".to_string()),
            doi: Some("https://doi.org/10.1002/anie.201915678".to_string()),
        }
    }

    #[test]
    fn test_to_ris() {
        assert_eq!(
            sample().to_ris(),
            "TY  - JOUR\n\
             T1  - Light-Driven Catalysis\n\
             AU  - Wurst, Hans Peter\n\
             AU  - Doe, Jane\n\
             PY  - 2020\n\
             JO  - Angew. Chem. Int. Ed.\n\
             VL  - 59\n\
             IS  - 12\n\
             SP  - 1234-1240\n\
             DO  - 10.1002/anie.201915678\n\
             ER  -"
        );
    }

    #[test]
    fn test_to_ris_skips_missing_fields() {
        let work = WorkMetadata {
            title: "Untitled".to_string(),
            ..Default::default()
        };
        assert_eq!(work.to_ris(), "TY  - JOUR\nT1  - Untitled\nER  -");
    }

    #[test]
    fn test_to_record_renders() {
        let record = sample().to_record().unwrap();
        assert_eq!(record.classification, Classification::Journal);
        assert_eq!(record.values(&RisTag::Author).count(), 2);
        assert_eq!(record.text(&RisTag::Doi), "10.1002/anie.201915678");

        let citation = AngewandteStyle::new().render(&record).unwrap();
        assert_eq!(
            citation,
            "H. P. Wurst, J. Doe, Angew. Chem. Int. Ed., 2020, 59, 1234-1240."
        );
    }

    #[test]
    fn test_person_without_given_name() {
        assert_eq!(PersonName::new("", "Curie").surname_first(), "Curie");
    }

    #[test]
    fn test_deserialize_partial_metadata() {
        let work: WorkMetadata = serde_json::from_str(
            r#"{"title": "Catalysis", "authors": [{"family": "Wurst"}], "year": 2020}"#,
        )
        .unwrap();
        assert_eq!(work.authors, vec![PersonName::new("", "Wurst")]);
        assert_eq!(work.year, Some(2020));
        assert!(work.doi.is_none());
    }
}
