//! Structured key-value fields attached to log entries
//!
//! This module provides:
//! - `FieldValue`: A single scalar or structured field value
//! - `FieldSet`: An immutable, key-ordered overlay of fields
//!
//! A `FieldSet` is never changed once it is shared. Builder methods and
//! [`FieldSet::merge`] return a new set and leave their inputs untouched, so
//! a derived logger can never leak fields back into its parent.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    /// Arbitrary structured data (arrays, objects, large unsigned numbers)
    Json(serde_json::Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Json(serde_json::Value::String(s)) => write!(f, "{}", s),
            FieldValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Json(v) => v.clone(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(i) => FieldValue::Int(i),
            Err(_) => FieldValue::Json(serde_json::Value::Number(i.into())),
        }
    }
}

impl From<usize> for FieldValue {
    fn from(i: usize) -> Self {
        FieldValue::from(i as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Json(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Immutable set of structured fields, ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Arc<BTreeMap<String, FieldValue>>,
}

impl FieldSet {
    /// Create a new empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a set with `key` added (or replaced)
    ///
    /// Other clones of this set keep their old contents.
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Arc::make_mut(&mut self.fields).insert(key.into(), value.into());
        self
    }

    /// Union of `self` and `overlay`; keys in `overlay` win.
    #[must_use]
    pub fn merge(&self, overlay: &FieldSet) -> FieldSet {
        if overlay.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return overlay.clone();
        }

        let mut merged = (*self.fields).clone();
        for (key, value) in overlay.iter() {
            merged.insert(key.to_string(), value.clone());
        }
        FieldSet {
            fields: Arc::new(merged),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in lexicographic key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Format fields as space-separated `key=value` pairs in key order
    pub fn format_text(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", escape_key(k), quote_if_needed(&v.to_string())))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Fields as a JSON object map
    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json_value()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldSet
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FieldSet {
            fields: Arc::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl From<BTreeMap<String, FieldValue>> for FieldSet {
    fn from(fields: BTreeMap<String, FieldValue>) -> Self {
        FieldSet {
            fields: Arc::new(fields),
        }
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_text())
    }
}

/// Keys cannot contain the separators used by the text format
fn escape_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_whitespace() || c == '=' { '_' } else { c })
        .collect()
}

fn quote_if_needed(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '"' || c == '=');
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            _ => push_escaped(&mut quoted, c),
        }
    }
    quoted.push('"');
    quoted
}

/// Escape control characters other than tab so `text` stays on one line
pub(crate) fn escape_control(text: &str) -> Cow<'_, str> {
    let breaks_line = |c: char| c.is_control() && c != '\t';
    if !text.chars().any(breaks_line) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if breaks_line(c) {
            push_escaped(&mut escaped, c);
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", c as u32)),
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_set_creation() {
        let set = FieldSet::new();
        assert!(set.is_empty());
        assert_eq!(set.format_text(), "");
    }

    #[test]
    fn test_field_set_with_fields() {
        let set = FieldSet::new()
            .with("user_id", 123)
            .with("username", "john_doe")
            .with("active", true);

        assert_eq!(set.len(), 3);
        assert_eq!(set.get("user_id"), Some(&FieldValue::Int(123)));
    }

    #[test]
    fn test_format_text_is_key_ordered() {
        let a = FieldSet::new().with("size", 10).with("animal", "walrus");
        let b = FieldSet::new().with("animal", "walrus").with("size", 10);

        assert_eq!(a.format_text(), "animal=walrus size=10");
        assert_eq!(a.format_text(), b.format_text());
    }

    #[test]
    fn test_format_text_quotes_ambiguous_values() {
        let set = FieldSet::new()
            .with("query", "id=1")
            .with("path", "/my docs")
            .with("empty", "");

        let text = set.format_text();
        assert!(text.contains("query=\"id=1\""));
        assert!(text.contains("path=\"/my docs\""));
        assert!(text.contains("empty=\"\""));
    }

    #[test]
    fn test_format_text_escapes_control_characters() {
        let set = FieldSet::new()
            .with("note", "x\ny")
            .with("tabbed", "a\tb")
            .with("windows", "line\r\n");

        let text = set.format_text();
        assert!(!text.contains('\n') && !text.contains('\r') && !text.contains('\t'));
        assert!(text.contains("note=\"x\\ny\""));
        assert!(text.contains("tabbed=\"a\\tb\""));
        assert!(text.contains("windows=\"line\\r\\n\""));
    }

    #[test]
    fn test_escape_control_keeps_tabs() {
        assert_eq!(escape_control("plain"), "plain");
        assert_eq!(escape_control("a\nb\tc"), "a\\nb\tc");
        assert_eq!(escape_control("bell\u{7}"), "bell\\u{0007}");
    }

    #[test]
    fn test_with_does_not_touch_clones() {
        let base = FieldSet::new().with("a", 1);
        let snapshot = base.clone();
        let extended = base.with("b", 2);

        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.contains_key("b"));
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_merge_overlay_wins() {
        let parent = FieldSet::new().with("key", "parent").with("only_parent", 1);
        let overlay = FieldSet::new().with("key", "child").with("only_child", 2);

        let merged = parent.merge(&overlay);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("key"), Some(&FieldValue::from("child")));
        assert_eq!(parent.get("key"), Some(&FieldValue::from("parent")));
        assert!(!parent.contains_key("only_child"));
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        let value = FieldValue::Float(f64::NAN);
        assert_eq!(value.to_json_value(), serde_json::Value::Null);
    }

    #[test]
    fn test_large_unsigned_keeps_value() {
        let value = FieldValue::from(u64::MAX);
        assert_eq!(value.to_string(), u64::MAX.to_string());
        assert_eq!(value.to_json_value(), serde_json::json!(u64::MAX));
    }

    #[test]
    fn test_from_iterator() {
        let set: FieldSet = vec![("b", 2), ("a", 1)].into_iter().collect();
        let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
