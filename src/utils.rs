use crate::regex::Regex;
use itertools::Itertools;
use std::sync::LazyLock;

static DOI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(10\.\d{4,9}/[-._;()/:a-zA-Z0-9]*)\b").unwrap());

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:\bTitle\b\s*:\s*(.*?)(?:\n|$))|(?:^Title\s*\n(.*?)(?:\n|$))").unwrap()
});

/// Capitalizes the first letter of every whitespace separated word and
/// lowercases the rest. Words are re-joined with single spaces.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .join(" ")
}

/// Formats a DOI string by removing resolver URL prefixes, `doi:` labels
/// and `[doi]` suffixes. Returns `None` when no `10.` prefix is found.
///
/// # Arguments
///
/// * `doi_str` - The DOI string to format
pub fn normalize_doi(doi_str: &str) -> Option<String> {
    let doi = doi_str
        .trim()
        .trim_end_matches("[doi]")
        .replace(|c: char| c.is_whitespace(), "");

    doi.find("10.").map(|pos| doi[pos..].to_string())
}

/// Finds every distinct DOI in a block of text, in order of first appearance.
pub fn find_dois(text: &str) -> Vec<String> {
    DOI_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .unique()
        .collect()
}

/// Finds the first DOI in a block of text.
pub fn find_first_doi(text: &str) -> Option<String> {
    DOI_REGEX.find(text).map(|m| m.as_str().to_string())
}

/// Finds a title labelled `Title: ...`, or written on the line after a
/// leading `Title` heading, in text extracted from a document.
///
/// Returns `None` when there is no such label or the title is blank.
pub fn find_title(text: &str) -> Option<String> {
    let captures = TITLE_REGEX.captures(text)?;
    let title = captures.get(1).or_else(|| captures.get(2))?.as_str().trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Splits an author written as `"Surname, Given Names"` into its trimmed
/// surname and given names.
///
/// Only the first comma separates; later commas are treated as whitespace by
/// callers that tokenize the given names. Returns `None` for names without a
/// comma.
pub fn split_author_name(name: &str) -> Option<(&str, &str)> {
    name.split_once(',')
        .map(|(family, given)| (family.trim(), given.trim()))
}
