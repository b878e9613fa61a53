//! Group, sort, filter and search over in-memory record lists. Inputs are
//! never mutated; results borrow from the input slice.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field read off a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Bool(bool),
    Number(f64),
    Text(Cow<'a, str>),
}

impl FieldValue<'_> {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Number(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }

    /// Total order used for sorting: values of one kind compare naturally,
    /// mixed kinds order null < bool < number < text.
    fn total_cmp(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }
}

impl From<String> for FieldValue<'_> {
    fn from(value: String) -> Self {
        FieldValue::Text(Cow::Owned(value))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Field access by name. `None` means the record has no such field.
pub trait Record {
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

impl Record for Value {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let value = self.get(key)?;
        Some(match value {
            Value::Null => FieldValue::Null,
            Value::Bool(flag) => FieldValue::Bool(*flag),
            Value::Number(number) => number.as_f64().map_or(FieldValue::Null, FieldValue::Number),
            Value::String(text) => FieldValue::Text(Cow::Borrowed(text)),
            other => FieldValue::Text(Cow::Owned(other.to_string())),
        })
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        (**self).field(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Buckets items by the stringified value of `key`; a missing field groups
/// under `"undefined"`. Items keep their input order inside each bucket.
pub fn group_by<'a, T: Record>(items: &'a [T], key: &str) -> BTreeMap<String, Vec<&'a T>> {
    let mut groups: BTreeMap<String, Vec<&'a T>> = BTreeMap::new();

    for item in items {
        let group = item
            .field(key)
            .map_or_else(|| "undefined".to_string(), |value| value.to_string());
        groups.entry(group).or_default().push(item);
    }

    groups
}

/// Stable sort on `key`. Records missing the field sort first.
pub fn sort_by<'a, T: Record>(items: &'a [T], key: &str, direction: SortDirection) -> Vec<&'a T> {
    let mut sorted: Vec<&'a T> = items.iter().collect();

    sorted.sort_by(|a, b| {
        let ordering = match (a.field(key), b.field(key)) {
            (Some(left), Some(right)) => left.total_cmp(&right),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    sorted
}

/// Items whose `key` field strictly equals `value` (same kind, same value).
pub fn filter_by<'a, 'v, T: Record>(
    items: &'a [T],
    key: &str,
    value: impl Into<FieldValue<'v>>,
) -> Vec<&'a T> {
    let expected = value.into();
    items
        .iter()
        .filter(|item| item.field(key).is_some_and(|field| field == expected))
        .collect()
}

/// Case-insensitive substring search across `keys`. An empty term returns
/// every item; null or missing fields never match.
pub fn search_in_array<'a, T: Record>(items: &'a [T], keys: &[&str], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items.iter().collect();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            keys.iter().any(|key| match item.field(key) {
                None | Some(FieldValue::Null) => false,
                Some(value) => value.to_string().to_lowercase().contains(&needle),
            })
        })
        .collect()
}
