//! Author and editor list formatting.
//!
//! Authors are gathered from `A1`, `A2`, `A3`, `A4` and `AU` in that order,
//! trimmed, stripped of blanks and deduplicated keeping the first occurrence.
//! Names written as `"Surname, Given Names"` have every given name reduced to
//! its initial. Names without a comma, or with an empty surname or no given
//! names around the comma, are emitted verbatim.

use crate::ris::tags::{AUTHOR_TAGS, RisTag};
use crate::ris::Record;
use crate::utils::split_author_name;
use itertools::Itertools;

/// Distinct author names of a record in collection order, using the
/// [`AUTHOR_TAGS`] priority.
pub fn collect_authors(record: &Record) -> Vec<&str> {
    collect_authors_from(record, &AUTHOR_TAGS)
}

/// Distinct author names read from the `priority` tags, in that order.
pub fn collect_authors_from<'a>(record: &'a Record, priority: &[RisTag]) -> Vec<&'a str> {
    priority
        .iter()
        .flat_map(|tag| record.values(tag))
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .unique()
        .collect()
}

/// Author list as `"H. P. Wurst, J. Doe, "`.
///
/// With `max_before_et_al` or more distinct authors only the first one is
/// written, followed by `" et al., "`. A record without authors gives `""`.
///
/// # Examples
///
/// ```
/// use chemcite::RisParser;
/// use chemcite::style::initials_then_surname;
///
/// let records = RisParser::new().parse("TY  - JOUR\nAU  - Wurst, Hans Peter\nAU  - Wurst, Hans Peter\nER  - \n");
/// assert_eq!(initials_then_surname(&records[0], 10), "H. P. Wurst, ");
/// ```
pub fn initials_then_surname(record: &Record, max_before_et_al: usize) -> String {
    author_list(
        &collect_authors(record),
        max_before_et_al,
        initials_first,
        initials_first,
    )
}

/// Author list as `"Wurst H. P., Doe J., "`.
///
/// The truncated form writes the first author as `"Wurst, H. P. et al., "`.
pub fn surname_then_initials(record: &Record, max_before_et_al: usize) -> String {
    author_list(
        &collect_authors(record),
        max_before_et_al,
        surname_first,
        surname_first_truncated,
    )
}

/// Editors as `"J. Doe, R. Roe"`, taking the initial of the part after the
/// last `", "` and the part before the first one.
///
/// Returns `None` when the record has no `ED` field or an editor value is empty.
pub fn editors(record: &Record) -> Option<String> {
    let field = record.get(&RisTag::Editor)?;
    field
        .iter()
        .map(|editor| {
            let surname = editor.split(", ").next()?;
            let initial = editor.rsplit(", ").next()?.chars().next()?;
            Some(format!("{initial}. {surname}"))
        })
        .collect::<Option<Vec<_>>>()
        .map(|names| names.join(", "))
}

fn author_list(
    authors: &[&str],
    max_before_et_al: usize,
    listed: fn(&str) -> String,
    truncated: fn(&str) -> String,
) -> String {
    if authors.len() < max_before_et_al {
        authors
            .iter()
            .map(|author| format!("{}, ", listed(author)))
            .collect()
    } else {
        authors
            .first()
            .map(|author| format!("{} et al., ", truncated(author)))
            .unwrap_or_default()
    }
}

/// Initials of every given name, e.g. `"H. P."` for `"Hans Peter"`.
fn initials(given: &str) -> String {
    given
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter_map(|name| name.chars().next())
        .map(|initial| format!("{initial}."))
        .join(" ")
}

/// Split a name into surname and initials, `None` when it must stay verbatim.
fn surname_and_initials(author: &str) -> Option<(&str, String)> {
    let (surname, given) = split_author_name(author)?;
    let initials = initials(given);
    if surname.is_empty() || initials.is_empty() {
        None
    } else {
        Some((surname, initials))
    }
}

fn initials_first(author: &str) -> String {
    match surname_and_initials(author) {
        Some((surname, initials)) => format!("{initials} {surname}"),
        None => author.to_string(),
    }
}

fn surname_first(author: &str) -> String {
    match surname_and_initials(author) {
        Some((surname, initials)) => format!("{surname} {initials}"),
        None => author.to_string(),
    }
}

fn surname_first_truncated(author: &str) -> String {
    match surname_and_initials(author) {
        Some((surname, initials)) => format!("{surname}, {initials}"),
        None => author.to_string(),
    }
}
