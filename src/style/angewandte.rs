//! Citation style of the journal Angewandte Chemie.
//!
//! The citation is assembled in a fixed order: authors, then a block that
//! depends on the reference type, then pages and a final period.
//!
//! - Theses: `"{label}, {venue}, "` followed by the bold year.
//! - Book-like types with editors: the author fragment and `" in {venue}"`
//!   (the venue alone when there are no authors) in italics, the italic volume, `"(Editor: …)"`, publisher, publishing
//!   place and bold year.
//! - Book-like types without editors: italic venue, `"Vol. {volume}"`,
//!   publisher, publishing place and bold year.
//! - Everything else: italic venue, bold year and italic volume.
//!
//! Journal articles end with the bare start page, other types with
//! `"S. {start}–{end}"`.

use crate::ris::tags::{ReferenceType, RisTag};
use crate::ris::Record;
use crate::style::authors::{editors, initials_then_surname};
use crate::style::{CitationStyle, Emphasis, StyleConfig};
use crate::{CitationError, Result};
use tracing::{debug, warn};

/// Tags searched, in order, for the journal or book name.
const VENUE_TAGS: [RisTag; 3] = [
    RisTag::JournalFull,
    RisTag::JournalFullAlternative,
    RisTag::SecondaryTitleExtended,
];

/// Renderer for Angewandte Chemie citations.
///
/// # Examples
///
/// ```
/// use chemcite::style::{AngewandteStyle, CitationStyle};
/// use chemcite::RisParser;
///
/// let input = "TY - JOUR\nAU - Smith, John\nPY - 2020\nJO - Nature\nVL - 5\nSP - 100\nER -";
/// let records = RisParser::new().parse(input);
///
/// let citation = AngewandteStyle::new().render(records.current().unwrap()).unwrap();
/// assert_eq!(citation, "J. Smith, Nature, 2020, 5, 100.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AngewandteStyle {
    config: StyleConfig,
}

impl AngewandteStyle {
    /// Creates a renderer producing plain, unformatted text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer emphasizing with ANSI terminal sequences.
    #[must_use]
    pub fn formatted() -> Self {
        Self::new().with_config(StyleConfig {
            emphasis: Emphasis::ansi(),
            ..Default::default()
        })
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    fn thesis(&self, out: &mut String, record: &Record, venue: &str) {
        let label = if self.config.dissertation {
            "Dissertation"
        } else if self.config.master {
            "Master"
        } else {
            "Thesis/Dissertation"
        };
        out.push_str(&format!("{label}, {venue}, "));
        self.push_year(out, record);
    }

    fn book_with_editors(&self, authors: &str, record: &Record, venue: &str, editors: &str) -> String {
        let emphasis = &self.config.emphasis;
        let volume = record.text(&RisTag::Volume);

        let author_part = authors.trim_end_matches([',', ' ']);
        let heading = if author_part.is_empty() {
            venue.to_string()
        } else {
            format!("{author_part} in {venue}")
        };
        let mut out = emphasis.italic(&heading);
        out.push_str(", ");
        if !volume.is_empty() {
            out.push_str(&emphasis.italic(&format!("Vol. {volume}")));
            out.push_str(", ");
        }
        out.push_str(&format!("(Editor: {editors}), "));
        self.push_publication(&mut out, record);
        out
    }

    fn book_without_editors(&self, out: &mut String, record: &Record, venue: &str) {
        let volume = record.text(&RisTag::Volume);

        out.push_str(&self.config.emphasis.italic(&venue.replace(',', "")));
        out.push_str(", ");
        if !volume.is_empty() {
            out.push_str(&format!("Vol. {volume}, "));
        }
        self.push_publication(out, record);
    }

    fn periodical(&self, out: &mut String, record: &Record, venue: &str) {
        let emphasis = &self.config.emphasis;

        out.push_str(&emphasis.italic(&venue.replace(',', "")));
        out.push_str(", ");
        self.push_year(out, record);
        out.push_str(&emphasis.italic(record.text(&RisTag::Volume)));
        out.push_str(", ");
    }

    /// Publisher, publishing place and year.
    fn push_publication(&self, out: &mut String, record: &Record) {
        let place = record
            .first(&RisTag::PublishingPlace)
            .or_else(|| record.first(&RisTag::PlacePublished))
            .unwrap_or_default();

        out.push_str(record.text(&RisTag::Publisher));
        out.push_str(", ");
        out.push_str(place);
        out.push_str(", ");
        self.push_year(out, record);
    }

    fn push_year(&self, out: &mut String, record: &Record) {
        out.push_str(&self.config.emphasis.bold(record.text(&RisTag::PublicationYear)));
        out.push_str(", ");
    }
}

/// The first non-empty journal, periodical or book name.
fn resolve_venue(record: &Record) -> Option<&str> {
    VENUE_TAGS
        .iter()
        .find_map(|tag| record.first(tag).filter(|name| !name.is_empty()))
}

fn push_pages(out: &mut String, record: &Record, kind: Option<ReferenceType>) {
    let start = record.text(&RisTag::StartPage);
    let end = record.text(&RisTag::EndPage);

    if kind.is_some_and(ReferenceType::is_journal_like) {
        out.push_str(start);
    } else if !start.is_empty() {
        if end.is_empty() {
            out.push_str(&format!("S. {start}"));
        } else {
            out.push_str(&format!("S. {start}–{end}"));
        }
    }
}

impl CitationStyle for AngewandteStyle {
    fn render(&self, record: &Record) -> Result<String> {
        let mut out = initials_then_surname(record, self.config.max_authors_before_et_al);
        if out.is_empty() {
            warn!(id = %record.id, "rendering reference without authors");
        }

        let Some(venue) = resolve_venue(record) else {
            warn!(id = %record.id, "no journal, periodical or book name");
            return Err(CitationError::MissingVenue {
                id: record.id.clone(),
            });
        };

        let kind = record.reference_type();
        match kind {
            Some(ReferenceType::Thesis) => self.thesis(&mut out, record, venue),
            Some(kind) if kind.is_book_like() => match editors(record) {
                Some(editors) => out = self.book_with_editors(&out, record, venue, &editors),
                None => {
                    if record.contains(&RisTag::Editor) {
                        debug!(id = %record.id, "unreadable editor field, citing without editors");
                    }
                    self.book_without_editors(&mut out, record, venue);
                }
            },
            _ => self.periodical(&mut out, record, venue),
        }

        let mut out = out.replace(", ,", ",");
        push_pages(&mut out, record, kind);

        let mut citation = out.trim_end_matches([',', ' ']).to_string();
        citation.push('.');
        Ok(citation)
    }
}
