//! RIS record data structures.
//!
//! A [`Record`] keeps the tag/value pairs of one reference in the order the
//! tags were first seen. Repeated tags collect their values into a
//! [`FieldValue::Multiple`]. Derived aliases (the short description of each
//! known tag, plus [`TYPE_OF_REFERENCE_LONG`]) are stored separately and are
//! snapshots taken at parse time.

use crate::ris::classify::Classification;
use crate::ris::tags::{ReferenceType, RisTag, TYPE_OF_REFERENCE_LONG};
use compact_str::CompactString;
use either::Either;
use indexmap::IndexMap;
use std::iter;

/// Value of one field: a single line, or every line of a repeated tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Append a value, turning a single value into a list in arrival order.
    pub fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(first) => {
                let first = std::mem::take(first);
                *self = FieldValue::Multiple(vec![first, value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }

    /// The first value.
    pub fn first(&self) -> Option<&str> {
        match self {
            FieldValue::Single(value) => Some(value),
            FieldValue::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// Iterate all values in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            FieldValue::Single(value) => Either::Left(iter::once(value.as_str())),
            FieldValue::Multiple(values) => Either::Right(values.iter().map(String::as_str)),
        }
    }

    /// Apply `f` to every value.
    pub(crate) fn map_values(&mut self, f: impl Fn(&str) -> String) {
        match self {
            FieldValue::Single(value) => *value = f(value.as_str()),
            FieldValue::Multiple(values) => {
                for value in values.iter_mut() {
                    *value = f(value.as_str());
                }
            }
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            FieldValue::Single(_) => 1,
            FieldValue::Multiple(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

/// One parsed RIS reference.
#[derive(Debug, Clone)]
pub struct Record {
    /// Identifier assigned at parse time.
    pub id: String,
    /// Coarse type bucket derived from the raw text of the reference.
    pub classification: Classification,
    /// Tag/value data in first-seen order.
    pub(crate) fields: IndexMap<RisTag, FieldValue>,
    /// Short description aliases, then the long type alias.
    pub(crate) aliases: IndexMap<CompactString, FieldValue>,
    /// Lines that could not be read as tag/value pairs, with their 1-based line number.
    pub ignored_lines: Vec<(usize, String)>,
}

impl Record {
    pub(crate) fn new(classification: Classification) -> Self {
        Self {
            id: nanoid::nanoid!(),
            classification,
            fields: IndexMap::new(),
            aliases: IndexMap::new(),
            ignored_lines: Vec::new(),
        }
    }

    /// Add a tag-value pair, appending to the existing value of a repeated tag.
    pub(crate) fn add_data(&mut self, tag: RisTag, value: String) {
        match self.fields.get_mut(&tag) {
            Some(existing) => existing.push(value),
            None => {
                self.fields.insert(tag, FieldValue::Single(value));
            }
        }
    }

    /// Add an ignored line with context.
    pub(crate) fn add_ignored_line(&mut self, line_number: usize, line: String) {
        self.ignored_lines.push((line_number, line));
    }

    /// Store a copy of every known tag's value under its short description, then
    /// resolve the long label of the reference type.
    pub(crate) fn derive_aliases(&mut self) {
        for (tag, value) in &self.fields {
            if let Some(short) = tag.short_description() {
                self.aliases.insert(short.into(), value.clone());
            }
        }
        if let Some(kind) = self.reference_type() {
            self.aliases
                .insert(TYPE_OF_REFERENCE_LONG.into(), FieldValue::from(kind.label()));
        }
    }

    pub(crate) fn field_mut(&mut self, tag: &RisTag) -> Option<&mut FieldValue> {
        self.fields.get_mut(tag)
    }

    /// The value stored for a tag.
    pub fn get(&self, tag: &RisTag) -> Option<&FieldValue> {
        self.fields.get(tag)
    }

    /// The first value of a tag, if it exists.
    pub fn first(&self, tag: &RisTag) -> Option<&str> {
        self.get(tag).and_then(FieldValue::first)
    }

    /// The first value of a tag, or `""` when the tag is absent.
    pub fn text(&self, tag: &RisTag) -> &str {
        self.first(tag).unwrap_or_default()
    }

    /// Every value of a tag in arrival order.
    pub fn values(&self, tag: &RisTag) -> impl Iterator<Item = &str> {
        self.get(tag).into_iter().flat_map(FieldValue::iter)
    }

    pub fn contains(&self, tag: &RisTag) -> bool {
        self.fields.contains_key(tag)
    }

    /// The value stored under a derived alias such as `"Publication year"`.
    pub fn alias(&self, key: &str) -> Option<&FieldValue> {
        self.aliases.get(key)
    }

    /// Look up a key by tag code first, then by alias.
    pub fn lookup(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .get(&RisTag::from_tag(key))
            .or_else(|| self.alias(key))
    }

    /// Tag/value pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&RisTag, &FieldValue)> {
        self.fields.iter()
    }

    /// Derived alias pairs.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.aliases.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The reference type resolved from the first `TY` value.
    pub fn reference_type(&self) -> Option<ReferenceType> {
        self.first(&RisTag::Type).and_then(ReferenceType::from_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> Record {
        Record::new(Classification::Other)
    }

    #[test]
    fn test_field_value_push() {
        let mut value = FieldValue::from("one");
        value.push("two".to_string());
        value.push("three".to_string());
        assert_eq!(
            value,
            FieldValue::Multiple(vec!["one".into(), "two".into(), "three".into()])
        );
        assert_eq!(value.first(), Some("one"));
        assert_eq!(value.len(), 3);
    }

    #[test]
    fn test_record_new() {
        let record = record();
        assert!(record.is_empty());
        assert!(record.ignored_lines.is_empty());
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_add_data_keeps_first_seen_order() {
        let mut record = record();
        record.add_data(RisTag::Type, "JOUR".into());
        record.add_data(RisTag::Author, "Smith, John".into());
        record.add_data(RisTag::Title, "Title".into());
        record.add_data(RisTag::Author, "Doe, Jane".into());

        let tags: Vec<_> = record.iter().map(|(tag, _)| tag.as_tag()).collect();
        assert_eq!(tags, vec!["TY", "AU", "TI"]);
        let authors: Vec<_> = record.values(&RisTag::Author).collect();
        assert_eq!(authors, vec!["Smith, John", "Doe, Jane"]);
    }

    #[test]
    fn test_text_defaults_to_empty() {
        let record = record();
        assert_eq!(record.text(&RisTag::Volume), "");
        assert_eq!(record.first(&RisTag::Volume), None);
    }

    #[test]
    fn test_derive_aliases() {
        let mut record = record();
        record.add_data(RisTag::Type, "JOUR".into());
        record.add_data(RisTag::PublicationYear, "2020".into());
        record.add_data(RisTag::Unknown("XY".into()), "whatever".into());
        record.derive_aliases();

        assert_eq!(record.alias("Publication year"), Some(&FieldValue::from("2020")));
        assert_eq!(record.alias("Type of reference"), Some(&FieldValue::from("JOUR")));
        assert_eq!(
            record.alias(TYPE_OF_REFERENCE_LONG),
            Some(&FieldValue::from("Journal"))
        );
        assert_eq!(record.aliases().count(), 3);
    }

    #[test]
    fn test_aliases_are_snapshots() {
        let mut record = record();
        record.add_data(RisTag::Volume, "5".into());
        record.derive_aliases();
        record.add_data(RisTag::Volume, "6".into());

        assert_eq!(record.alias("Volume number"), Some(&FieldValue::from("5")));
        assert_eq!(record.get(&RisTag::Volume).map(FieldValue::len), Some(2));
    }

    #[test]
    fn test_unknown_type_code_has_no_long_alias() {
        let mut record = record();
        record.add_data(RisTag::Type, "DISS".into());
        record.derive_aliases();
        assert_eq!(record.alias(TYPE_OF_REFERENCE_LONG), None);
        assert_eq!(record.reference_type(), None);
    }

    #[test]
    fn test_lookup_by_tag_or_alias() {
        let mut record = record();
        record.add_data(RisTag::JournalFullAlternative, "Nature".into());
        record.derive_aliases();
        assert_eq!(record.lookup("JO"), record.lookup("Journal/Periodical name 2"));
        assert_eq!(record.lookup("JF"), None);
    }
}
