//! Coarse classification of a raw RIS reference.
//!
//! The classification only decides which rendering branch a reference
//! belongs to. It is computed from the raw text of one reference: every `TY`
//! line is checked against the type codes below in priority order, and the
//! book bucket is split by whether any `ED` line is present.

use crate::ris::parse::split_tag_value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference bucket, see [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Journal,
    BookWithEditor,
    BookWithoutEditor,
    Thesis,
    Dissertation,
    Patent,
    Webpage,
    Other,
}

impl Classification {
    /// Human readable label, e.g. `Journal Quote`.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Journal => "Journal Quote",
            Classification::BookWithEditor => "Book Quote with Editor",
            Classification::BookWithoutEditor => "Book Quote without Editor",
            Classification::Thesis => "Thesis Quote",
            Classification::Dissertation => "Dissertation Quote",
            Classification::Patent => "Patent Quote",
            Classification::Webpage => "Webpage Quote",
            Classification::Other => "Other Quote",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the raw text of one reference.
///
/// # Examples
///
/// ```
/// use chemcite::{classify, Classification};
///
/// let text = "TY  - BOOK\nTI  - Organic Chemistry\nED  - Clayden, Jonathan\nER  - \n";
/// assert_eq!(classify(text), Classification::BookWithEditor);
/// assert_eq!(classify(text).to_string(), "Book Quote with Editor");
/// ```
pub fn classify(raw: &str) -> Classification {
    let mut types = Vec::new();
    let mut has_editor = false;

    for line in raw.lines() {
        let Some((tag, value)) = split_tag_value(line) else {
            continue;
        };
        match tag {
            "TY" => types.push(value),
            "ED" => has_editor = true,
            _ => {}
        }
    }

    let has_type = |code: &str| types.iter().any(|value| *value == code);

    if has_type("JOUR") {
        Classification::Journal
    } else if has_type("BOOK") {
        if has_editor {
            Classification::BookWithEditor
        } else {
            Classification::BookWithoutEditor
        }
    } else if has_type("THES") {
        Classification::Thesis
    } else if has_type("DISS") {
        Classification::Dissertation
    } else if has_type("PAT") {
        Classification::Patent
    } else if has_type("WEB") {
        Classification::Webpage
    } else {
        Classification::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("TY  - JOUR\nTI  - A\nER  - \n", Classification::Journal)]
    #[case("TY - JOUR\nER -", Classification::Journal)]
    #[case("TY  - BOOK\nED  - Doe, Jane\nER  - \n", Classification::BookWithEditor)]
    #[case("TY  - BOOK\nAU  - Doe, Jane\nER  - \n", Classification::BookWithoutEditor)]
    #[case("TY  - THES\nER  - \n", Classification::Thesis)]
    #[case("TY  - DISS\nER  - \n", Classification::Dissertation)]
    #[case("TY  - PAT\nER  - \n", Classification::Patent)]
    #[case("TY  - WEB\nER  - \n", Classification::Webpage)]
    #[case("TY  - CHAP\nER  - \n", Classification::Other)]
    #[case("", Classification::Other)]
    fn test_classify(#[case] raw: &str, #[case] expected: Classification) {
        assert_eq!(classify(raw), expected);
    }

    #[test]
    fn test_journal_has_priority_over_book() {
        let raw = "TY  - BOOK\nTY  - JOUR\nED  - Doe, Jane\n";
        assert_eq!(classify(raw), Classification::Journal);
    }

    #[test]
    fn test_empty_editor_line_counts_as_editor() {
        let raw = "TY  - BOOK\nED  -\n";
        assert_eq!(classify(raw), Classification::BookWithEditor);
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        let raw = "# TY  - JOUR\nTY  - PAT\n";
        assert_eq!(classify(raw), Classification::Patent);
    }

    #[rstest]
    #[case(Classification::Journal, "Journal Quote")]
    #[case(Classification::BookWithoutEditor, "Book Quote without Editor")]
    #[case(Classification::Other, "Other Quote")]
    fn test_label(#[case] classification: Classification, #[case] expected: &str) {
        assert_eq!(classification.to_string(), expected);
    }
}
