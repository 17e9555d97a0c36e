//! Filesystem-safe names for files holding a reference.
//!
//! Names are safe on Windows as well: control characters and
//! `< > : " / \ | ? *` are removed, leading and trailing spaces and periods
//! are trimmed and the result is at most 255 characters long.

use crate::ris::{Record, RisTag};
use crate::style::CitationStyle;
use crate::Result;

/// Longest file name most filesystems accept, in characters.
pub const MAX_FILE_NAME_LEN: usize = 255;

const INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Turns arbitrary text into a valid file name.
///
/// # Examples
///
/// ```
/// use chemcite::naming::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name(" a/b:c? "), "abc");
/// assert_eq!(sanitize_file_name("...hidden."), "hidden");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control() && !INVALID_CHARS.contains(c))
        .collect::<String>()
        .trim_matches([' ', '.'])
        .chars()
        .take(MAX_FILE_NAME_LEN)
        .collect()
}

/// File name made of the citation of `record` and `extension`.
///
/// Pass a style with plain emphasis; markers are not stripped.
///
/// # Errors
///
/// Returns the error of the style when the record cannot be rendered.
///
/// # Examples
///
/// ```
/// use chemcite::naming::citation_file_name;
/// use chemcite::{AngewandteStyle, RisParser};
///
/// let records = RisParser::new().parse("TY  - JOUR\nAU  - Smith, John\nPY  - 2020\nJO  - Nature\nVL  - 5\nSP  - 100\nER  - \n");
/// let name = citation_file_name(&records[0], &AngewandteStyle::new(), "pdf").unwrap();
/// assert_eq!(name, "J. Smith, Nature, 2020, 5, 100.pdf");
/// ```
pub fn citation_file_name<S>(record: &Record, style: &S, extension: &str) -> Result<String>
where
    S: CitationStyle + ?Sized,
{
    let citation = style.render(record)?;
    Ok(with_extension(citation.trim_end_matches('.'), extension))
}

/// File name made of the first `max_len` characters of the record title.
///
/// The title is read from `T1`, then `TI`. Returns `None` when nothing is
/// left of it after sanitizing.
pub fn title_file_name(record: &Record, max_len: usize, extension: &str) -> Option<String> {
    let title = [RisTag::TitleAlternative, RisTag::Title]
        .iter()
        .find_map(|tag| record.first(tag).filter(|title| !title.trim().is_empty()))?;
    let title: String = title.chars().take(max_len).collect();

    let stem = sanitize_file_name(&title);
    if stem.is_empty() {
        None
    } else {
        Some(with_extension(&stem, extension))
    }
}

fn with_extension(stem: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        sanitize_file_name(stem)
    } else {
        sanitize_file_name(&format!("{stem}.{extension}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ris::RisParser;
    use crate::style::AngewandteStyle;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn record(body: &str) -> Record {
        let text = format!("TY  - JOUR\n{body}ER  - \n");
        RisParser::new().parse(&text).into_iter().next().unwrap()
    }

    #[rstest]
    #[case("plain name", "plain name")]
    #[case("a<b>c:d\"e/f\\g|h?i*j", "abcdefghij")]
    #[case("tab\there\u{0}", "tabhere")]
    #[case(" . trimmed . ", "trimmed")]
    #[case("", "")]
    fn test_sanitize_file_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_file_name(input), expected);
    }

    #[test]
    fn test_sanitize_truncates() {
        let long = "ä".repeat(300);
        let name = sanitize_file_name(&long);
        assert_eq!(name.chars().count(), MAX_FILE_NAME_LEN);
    }

    #[test]
    fn test_citation_file_name() {
        let record = record("AU  - Wurst, Hans Peter\nPY  - 2020\nJO  - Chem/Eur. J.\nVL  - 26\nSP  - 1\n");
        let name = citation_file_name(&record, &AngewandteStyle::new(), ".pdf").unwrap();
        assert_eq!(name, "H. P. Wurst, ChemEur. J., 2020, 26, 1.pdf");
    }

    #[test]
    fn test_citation_file_name_missing_venue() {
        let record = record("AU  - Wurst, Hans Peter\n");
        let result = citation_file_name(&record, &AngewandteStyle::new(), "pdf");
        assert!(matches!(result, Err(crate::CitationError::MissingVenue { .. })));
    }

    #[rstest]
    #[case("T1  - What: A Study?\n", 75, Some("What A Study.ris"))]
    #[case("TI  - Long Title Here\n", 4, Some("Long.ris"))]
    #[case("T1  - \nTI  - Fallback\n", 75, Some("Fallback.ris"))]
    #[case("T1  - ???\n", 75, None)]
    #[case("", 75, None)]
    fn test_title_file_name(#[case] body: &str, #[case] max_len: usize, #[case] expected: Option<&str>) {
        assert_eq!(title_file_name(&record(body), max_len, "ris").as_deref(), expected);
    }
}
