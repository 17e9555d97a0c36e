//! A library for parsing RIS references and rendering them as citations in
//! the style of *Angewandte Chemie*.
//!
//! `chemcite` reads the line oriented RIS exchange format into records keyed
//! by tag, classifies every record by its type of reference and renders it
//! through a [`CitationStyle`].
//!
//! # Key Features
//!
//! - **RIS parsing**: records keyed by [`RisTag`], repeated tags kept in
//!   order, human readable aliases for every known tag, unreadable lines
//!   kept on the record instead of failing the whole input.
//!
//! - **Classification**: journal article, book with or without editors,
//!   thesis, dissertation, patent, web page or other.
//!
//! - **Citation rendering**:
//!   - Angewandte Chemie author lists with initials and "et al."
//!   - Configurable bold and italic markers (plain, ANSI, Markdown)
//!   - Numbered reference lists, optionally rendered in parallel
//!
//! - **Helpers** for DOIs found in free text, bibliographic metadata
//!   converted to RIS, and filesystem-safe names for citation files.
//!
//! # Basic Usage
//!
//! ```rust
//! use chemcite::{AngewandteStyle, CitationStyle, RisParser};
//!
//! let input = r#"TY  - JOUR
//! AU  - Wurst, Hans Peter
//! PY  - 2020
//! JO  - Angew. Chem. Int. Ed.
//! VL  - 59
//! SP  - 1234
//! ER  - "#;
//!
//! let records = RisParser::new().parse(input);
//! let citation = AngewandteStyle::new().render(&records[0]).unwrap();
//! assert_eq!(citation, "H. P. Wurst, Angew. Chem. Int. Ed., 2020, 59, 1234.");
//! ```
//!
//! # Reference Lists
//!
//! ```rust
//! use chemcite::style::{Emphasis, StyleConfig};
//!
//! let input = "TY  - JOUR\nAU  - Doe, Jane\nPY  - 2021\nJF  - Science\nVL  - 6\nSP  - 7\nER  - \n";
//! let records = chemcite::parse(input);
//!
//! let config = StyleConfig {
//!     emphasis: Emphasis::markdown(),
//!     ..Default::default()
//! };
//! let style = chemcite::AngewandteStyle::new().with_config(config);
//! let list = chemcite::chain_render(&records, &style).unwrap();
//! assert_eq!(list, "[1]\tJ. Doe, *Science*, **2021**, *6*, 7.");
//! ```
//!
//! # Error Handling
//!
//! The library uses a custom [`Result`] type that wraps [`CitationError`].
//! Parsing never fails; rendering fails when a record has no venue:
//!
//! ```rust
//! use chemcite::{CitationError, CitationStyle, AngewandteStyle, RisParser};
//!
//! let records = RisParser::new().parse("TY  - JOUR\nAU  - Smith, John\nER  - \n");
//! match AngewandteStyle::new().render(&records[0]) {
//!     Ok(citation) => println!("{citation}"),
//!     Err(CitationError::MissingVenue { id }) => eprintln!("no venue for {id}"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```
//!
//! # Thread Safety
//!
//! Records, parsers and styles are plain data and can be shared between
//! threads. Rendering is a pure function of the record and the style, and
//! [`style::chain_render_parallel`] renders a list with `rayon` when the
//! `parallel` feature is enabled.

use thiserror::Error;

pub mod metadata;
pub mod naming;
mod regex;
pub mod ris;
pub mod style;
pub mod utils;

// Reexports
pub use metadata::{PersonName, WorkMetadata};
pub use ris::tags::{ReferenceType, RisTag};
pub use ris::{Classification, FieldValue, Record, ReferenceCollection, RisParser, classify};
pub use style::{AngewandteStyle, CitationStyle, Emphasis, StyleConfig, chain_render};

/// A specialized Result type for citation operations.
pub type Result<T> = std::result::Result<T, CitationError>;

/// Represents errors that can occur while reading or rendering references.
#[derive(Error, Debug)]
pub enum CitationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No journal, periodical or book title in record {id}")]
    MissingVenue { id: String },
}

/// Trait for implementing reference parsers.
pub trait ReferenceParser {
    /// Parse a string containing one or more references.
    ///
    /// # Arguments
    ///
    /// * `input` - The string containing reference data
    ///
    /// # Returns
    ///
    /// The parsed records in input order. Malformed content is recovered
    /// from, never reported as an error.
    fn parse(&self, input: &str) -> ReferenceCollection;
}

/// Parse RIS text with the default parser.
pub fn parse(input: &str) -> ReferenceCollection {
    RisParser::new().parse(input)
}

/// Render one record in the Angewandte Chemie style with the given configuration.
///
/// # Errors
///
/// Returns [`CitationError::MissingVenue`] when the record has no venue.
pub fn render(record: &Record, config: &StyleConfig) -> Result<String> {
    AngewandteStyle::new()
        .with_config(config.clone())
        .render(record)
}
