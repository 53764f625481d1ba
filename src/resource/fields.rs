//! Lenient access to a parameter collection
//!
//! The host hands each collection over as a loosely-typed JSON object. The
//! accessors here never fail: a value that is missing, empty, zero or of an
//! unexpected type reads as `None`, so the payload simply omits it.

use serde_json::{Map, Number, Value};

/// Host truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => is_nonzero(n),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_nonzero(n: &Number) -> bool {
    n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true)
}

/// One parameter collection (e.g., the contents of `postsParams`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBag {
    values: Map<String, Value>,
}

impl FieldBag {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Wrap a host value; anything other than an object becomes an empty bag
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map.clone()),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Non-empty text. Numbers are accepted and rendered as text.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if is_nonzero(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Non-zero number, passed through as given. Numeric strings are parsed.
    pub fn number(&self, name: &str) -> Option<Number> {
        let number = match self.values.get(name)? {
            Value::Number(n) => n.clone(),
            Value::String(s) => parse_number(s.trim())?,
            _ => return None,
        };
        is_nonzero(&number).then_some(number)
    }

    /// Non-zero number as a float
    pub fn float(&self, name: &str) -> Option<f64> {
        self.number(name).and_then(|n| n.as_f64())
    }

    /// Boolean whenever present, including `false`
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.values.get(name)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for FieldBag {
    fn from(values: Map<String, Value>) -> Self {
        Self::new(values)
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    s.parse::<f64>().ok().and_then(Number::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> FieldBag {
        FieldBag::from_value(&value)
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_text_skips_empty_and_non_text() {
        let fields = bag(json!({"a": "x", "b": "", "c": true, "d": 42, "e": null}));
        assert_eq!(fields.text("a"), Some("x".to_string()));
        assert_eq!(fields.text("b"), None);
        assert_eq!(fields.text("c"), None);
        assert_eq!(fields.text("d"), Some("42".to_string()));
        assert_eq!(fields.text("e"), None);
        assert_eq!(fields.text("missing"), None);
    }

    #[test]
    fn test_number_skips_zero() {
        let fields = bag(json!({"a": 10, "b": 0, "c": "25", "d": "abc", "e": 2.5}));
        assert_eq!(fields.number("a"), Some(Number::from(10)));
        assert_eq!(fields.number("b"), None);
        assert_eq!(fields.number("c"), Some(Number::from(25)));
        assert_eq!(fields.number("d"), None);
        assert_eq!(fields.float("e"), Some(2.5));

        // "0" is zero once parsed, so it is skipped like 0
        let fields = bag(json!({"a": "0", "b": "0.0", "c": " 7 "}));
        assert_eq!(fields.number("a"), None);
        assert_eq!(fields.number("b"), None);
        assert_eq!(fields.number("c"), Some(Number::from(7)));
    }

    #[test]
    fn test_flag_keeps_false() {
        let fields = bag(json!({"a": false, "b": true, "c": "true", "d": 1}));
        assert_eq!(fields.flag("a"), Some(false));
        assert_eq!(fields.flag("b"), Some(true));
        assert_eq!(fields.flag("c"), Some(true));
        assert_eq!(fields.flag("d"), None);
        assert_eq!(fields.flag("missing"), None);
    }

    #[test]
    fn test_non_object_is_empty() {
        assert!(bag(json!("nope")).is_empty());
        assert!(bag(json!(null)).is_empty());
        assert!(!bag(json!({"a": 1})).is_empty());
    }
}
