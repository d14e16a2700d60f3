//! Transient prop bags for dynamic pass-through attributes.
//!
//! Statically known props live on the typed per-family props structs; the
//! bag only carries the small set of pass-through attributes a caller may
//! forward verbatim (the test identifier, `id`, `htmlFor`, form-library
//! integration keys). Bags are reconstructed on every render call and have
//! no identity beyond that call.

use serde_json::{Map, Value};

/// Attribute name of the stable test identifier required on every
/// interactive component. Its absence is a configuration error, not a
/// silent default.
pub const TEST_ID: &str = "data-tid";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single pass-through prop value.
pub enum PropValue {
    /// String-valued prop.
    Str(String),
    /// Boolean-valued prop.
    Bool(bool),
    /// Integer-valued prop.
    Int(i64),
}

impl PropValue {
    /// The string form rendered into an attribute value.
    pub fn as_attr(&self) -> String {
        match self {
            Self::Str(value) => value.clone(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Insertion-ordered prop bag. Later writes to an existing key replace the
/// earlier value in place, so iteration order stays the caller's order.
pub struct Props {
    entries: Vec<(String, PropValue)>,
}

impl Props {
    /// An empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Inserts or replaces a prop.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up a prop by name.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Looks up a string-valued prop by name.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(PropValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Whether the bag contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    /// Prop names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of props in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Builds a bag from a JSON object. Strings, booleans, and integral
    /// numbers map onto [`PropValue`]; nulls and structured values are
    /// skipped (the registry forwards those separately).
    pub fn from_json(object: &Map<String, Value>) -> Self {
        let mut props = Self::new();
        for (key, value) in object {
            match value {
                Value::String(text) => props.set(key.as_str(), text.as_str()),
                Value::Bool(flag) => props.set(key.as_str(), *flag),
                Value::Number(number) => {
                    if let Some(int) = number.as_i64() {
                        props.set(key.as_str(), int);
                    }
                }
                _ => {}
            }
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let props = Props::new()
            .with("data-tid", "t1")
            .with("id", "field")
            .with("htmlFor", "name");
        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["data-tid", "id", "htmlFor"]);
    }

    #[test]
    fn later_writes_replace_in_place() {
        let props = Props::new()
            .with("id", "first")
            .with("data-tid", "t1")
            .with("id", "second");
        assert_eq!(props.len(), 2);
        assert_eq!(props.get_str("id"), Some("second"));
        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["id", "data-tid"]);
    }

    #[test]
    fn from_json_keeps_scalars_and_skips_structured_values() {
        let object = serde_json::json!({
            "data-tid": "t1",
            "disabled": true,
            "tabIndex": 3,
            "options": [{"value": "a"}],
            "meta": null,
        });
        let props = Props::from_json(object.as_object().expect("object literal"));
        assert_eq!(props.get_str("data-tid"), Some("t1"));
        assert_eq!(props.get("disabled"), Some(&PropValue::Bool(true)));
        assert_eq!(props.get("tabIndex"), Some(&PropValue::Int(3)));
        assert!(!props.contains_key("options"));
        assert!(!props.contains_key("meta"));
    }
}
