//! Citation rendering.
//!
//! A [`CitationStyle`] turns one [`Record`] into a citation string. Rendering
//! is a pure function of the record and the style configuration, so the same
//! record always renders to the same string and records may be rendered in
//! any order or in parallel.
//!
//! # Example
//!
//! ```
//! use chemcite::style::{AngewandteStyle, chain_render};
//! use chemcite::RisParser;
//!
//! let input = "TY  - JOUR\nAU  - Smith, John\nPY  - 2020\nJO  - Nature\nVL  - 5\nSP  - 100\nER  - \n\
//!              TY  - JOUR\nAU  - Doe, Jane\nPY  - 2021\nJO  - Science\nVL  - 6\nSP  - 7\nER  - \n";
//! let records = RisParser::new().parse(input);
//!
//! let list = chain_render(&records, &AngewandteStyle::new()).unwrap();
//! assert_eq!(list, "[1]\tJ. Smith, Nature, 2020, 5, 100.\n[2]\tJ. Doe, Science, 2021, 6, 7.");
//! ```

mod angewandte;
mod authors;

pub use angewandte::AngewandteStyle;
pub use authors::{collect_authors, collect_authors_from, editors, initials_then_surname, surname_then_initials};

use crate::ris::Record;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Begin/end markers used for bold and italic text.
///
/// # Examples
///
/// ```
/// use chemcite::style::Emphasis;
///
/// let emphasis = Emphasis::markdown();
/// assert_eq!(emphasis.bold("2020"), "**2020**");
/// assert_eq!(Emphasis::plain().italic("Nature"), "Nature");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emphasis {
    pub bold_on: String,
    pub bold_off: String,
    pub italic_on: String,
    pub italic_off: String,
}

impl Emphasis {
    /// No markers at all, for plain text output such as file names.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// ANSI SGR sequences for terminals.
    #[must_use]
    pub fn ansi() -> Self {
        Self {
            bold_on: "\x1b[1m".to_string(),
            bold_off: "\x1b[22m".to_string(),
            italic_on: "\x1b[3m".to_string(),
            italic_off: "\x1b[23m".to_string(),
        }
    }

    /// Markdown `**bold**` and `*italic*`.
    #[must_use]
    pub fn markdown() -> Self {
        Self {
            bold_on: "**".to_string(),
            bold_off: "**".to_string(),
            italic_on: "*".to_string(),
            italic_off: "*".to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        format!("{}{}{}", self.bold_on, text, self.bold_off)
    }

    pub fn italic(&self, text: &str) -> String {
        format!("{}{}{}", self.italic_on, text, self.italic_off)
    }
}

/// Configuration options for rendering citations.
///
/// # Examples
///
/// ```
/// use chemcite::style::{Emphasis, StyleConfig};
///
/// let config = StyleConfig {
///     emphasis: Emphasis::ansi(),
///     dissertation: true,
///     ..Default::default()
/// };
/// assert_eq!(config.max_authors_before_et_al, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Markers for bold and italic text.
    pub emphasis: Emphasis,
    /// Label a thesis as a doctoral dissertation.
    pub dissertation: bool,
    /// Label a thesis as a master thesis. Ignored when `dissertation` is set.
    pub master: bool,
    /// From this many distinct authors on, only the first is named, followed by "et al.".
    pub max_authors_before_et_al: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            emphasis: Emphasis::plain(),
            dissertation: false,
            master: false,
            max_authors_before_et_al: 10,
        }
    }
}

/// Trait for implementing citation styles.
pub trait CitationStyle {
    /// Render one record as a citation.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError`](crate::CitationError) when a field the style
    /// cannot do without is missing.
    fn render(&self, record: &Record) -> Result<String>;
}

/// Render records as a numbered reference list.
///
/// Each line reads `[{n}]\t{citation}`, numbered from 1; the result carries no
/// trailing whitespace.
///
/// # Errors
///
/// Fails with the first error returned by the style.
pub fn chain_render<'a, I, S>(records: I, style: &S) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
    S: CitationStyle + ?Sized,
{
    let citations = records
        .into_iter()
        .map(|record| style.render(record))
        .collect::<Result<Vec<_>>>()?;
    Ok(number_citations(&citations))
}

/// Parallel version of [`chain_render`]; line numbering follows the input order.
///
/// # Errors
///
/// Fails with an error returned by the style.
#[cfg(feature = "parallel")]
pub fn chain_render_parallel<S>(records: &[Record], style: &S) -> Result<String>
where
    S: CitationStyle + Sync + ?Sized,
{
    use rayon::prelude::*;

    let citations = records
        .par_iter()
        .map(|record| style.render(record))
        .collect::<Result<Vec<_>>>()?;
    Ok(number_citations(&citations))
}

fn number_citations(citations: &[String]) -> String {
    citations
        .iter()
        .enumerate()
        .map(|(i, citation)| format!("[{}]\t{}\n", i + 1, citation))
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ris::RisParser;
    use pretty_assertions::assert_eq;

    const TWO_JOURNALS: &str = "TY  - JOUR\nAU  - Smith, John\nPY  - 2020\nJO  - Nature\nVL  - 5\nSP  - 100\nER  - \n\
                                TY  - JOUR\nAU  - Doe, Jane\nPY  - 2021\nJO  - Science\nVL  - 6\nSP  - 7\nER  - \n";

    #[test]
    fn test_chain_render_numbers_lines() {
        let records = RisParser::new().parse(TWO_JOURNALS);
        let list = chain_render(&records, &AngewandteStyle::new()).unwrap();
        assert_eq!(
            list,
            "[1]\tJ. Smith, Nature, 2020, 5, 100.\n[2]\tJ. Doe, Science, 2021, 6, 7."
        );
        assert!(list.starts_with("[1]\t"));
        assert_eq!(list, list.trim_end());
    }

    #[test]
    fn test_chain_render_empty() {
        let records = RisParser::new().parse("");
        assert_eq!(chain_render(&records, &AngewandteStyle::new()).unwrap(), "");
    }

    #[test]
    fn test_chain_render_stops_at_missing_venue() {
        let input = format!("{TWO_JOURNALS}TY  - JOUR\nAU  - Roe, Richard\nER  - \n");
        let records = RisParser::new().parse(&input);
        let result = chain_render(&records, &AngewandteStyle::new());
        assert!(matches!(result, Err(crate::CitationError::MissingVenue { .. })));
    }

    #[test]
    fn test_chain_render_accepts_trait_objects() {
        let records = RisParser::new().parse(TWO_JOURNALS);
        let style: Box<dyn CitationStyle> = Box::new(AngewandteStyle::new());
        assert!(chain_render(records.iter(), style.as_ref()).is_ok());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_chain_render_parallel_matches_sequential() {
        let records = RisParser::new().parse(TWO_JOURNALS);
        let style = AngewandteStyle::new();
        assert_eq!(
            chain_render_parallel(&records, &style).unwrap(),
            chain_render(&records, &style).unwrap()
        );
    }

    #[test]
    fn test_style_config_from_json() {
        let config: StyleConfig =
            serde_json::from_str(r#"{"master": true, "emphasis": {"bold_on": "<b>", "bold_off": "</b>"}}"#)
                .unwrap();
        assert!(config.master);
        assert!(!config.dissertation);
        assert_eq!(config.max_authors_before_et_al, 10);
        assert_eq!(config.emphasis.bold("x"), "<b>x</b>");
        assert_eq!(config.emphasis.italic("x"), "x");
    }

    #[test]
    fn test_emphasis_presets() {
        assert_eq!(Emphasis::ansi().bold("2020"), "\x1b[1m2020\x1b[22m");
        assert_eq!(Emphasis::plain().bold("2020"), "2020");
        assert_eq!(Emphasis::markdown().italic("Nature"), "*Nature*");
    }
}
