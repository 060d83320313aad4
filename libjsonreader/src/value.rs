//! JSON value representation.

use crate::error::{ReadError, Result};
use indexmap::IndexMap;
use std::fmt;

/// A parsed JSON value.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Object (ordered name-value map).
    Object(Object),
    /// Array of objects.
    Array(Array),
    /// String content, kept exactly as read.
    Text(String),
    /// 32-bit signed integer.
    Number(i32),
    /// Boolean value.
    Boolean(bool),
    /// Null value.
    Null,
}

impl Value {
    /// Coerce this value to an integer.
    ///
    /// - `Number` returns its value.
    /// - `Text` parses its content and fails with
    ///   [`ReadError::NumberFormat`] if that is not an integer.
    /// - `Boolean` returns 1 or 0.
    /// - `Object`, `Array` and `Null` return 0.
    pub fn to_int(&self) -> Result<i32> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ReadError::NumberFormat {
                    text: s.clone(),
                    position: None,
                    origin: String::new(),
                }),
            Value::Boolean(b) => Ok(i32::from(*b)),
            Value::Object(_) | Value::Array(_) | Value::Null => Ok(0),
        }
    }

    /// Returns the array's objects, or an empty slice for any other value.
    pub fn to_list_of_objects(&self) -> &[Object] {
        match self {
            Value::Array(arr) => arr.as_slice(),
            _ => &[],
        }
    }

    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is a `Number`.
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an `Array`.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an `Object`.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Object(obj) => fmt::Debug::fmt(obj, f),
            Value::Array(arr) => fmt::Debug::fmt(arr, f),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

/// Scalars print their plain content; objects and arrays use the debug form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Array> for Value {
    fn from(arr: Array) -> Self {
        Value::Array(arr)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// A JSON object: field names mapped to values in insertion order.
///
/// Inserting an existing name replaces its value and keeps its position.
#[derive(Clone, Default, PartialEq)]
pub struct Object {
    fields: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }

    /// Returns `true` if the object has a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.fields
            .get(name)
            .ok_or_else(|| ReadError::KeyNotFound(name.to_string()))
    }

    /// Number of distinct field names.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` for `{}`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in insertion order. A repeated name keeps the position of
    /// its first occurrence.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.insert(k.into(), v.into());
        }
        obj
    }
}

/// A JSON array. Elements are always objects.
#[derive(Clone, Default, PartialEq)]
pub struct Array {
    objects: Vec<Object>,
}

impl Array {
    /// Create an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, obj: Object) {
        self.objects.push(obj);
    }

    /// Look up an element by position.
    pub fn get(&self, index: usize) -> Result<&Object> {
        self.objects.get(index).ok_or(ReadError::IndexOutOfRange {
            index,
            len: self.objects.len(),
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` for `[]`.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over elements in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.objects.iter()
    }

    /// Borrow the elements as a slice, in document order.
    pub fn as_slice(&self) -> &[Object] {
        &self.objects
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.objects).finish()
    }
}

impl FromIterator<Object> for Array {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_array() -> Array {
        [
            Object::from_iter([("n", 1)]),
            Object::from_iter([("n", 2)]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_to_int() {
        assert_eq!(Value::Number(-42).to_int().unwrap(), -42);
        assert_eq!(Value::from("7").to_int().unwrap(), 7);
        assert_eq!(Value::Boolean(true).to_int().unwrap(), 1);
        assert_eq!(Value::Boolean(false).to_int().unwrap(), 0);
        assert_eq!(Value::Null.to_int().unwrap(), 0);
        assert_eq!(Value::Object(Object::new()).to_int().unwrap(), 0);
        assert_eq!(Value::Array(sample_array()).to_int().unwrap(), 0);
    }

    #[test]
    fn test_to_int_bad_text() {
        let err = Value::from("seven").to_int().unwrap_err();
        assert!(matches!(
            err,
            ReadError::NumberFormat { ref text, position: None, .. } if text == "seven"
        ));
        assert!(Value::from("99999999999").to_int().is_err());
    }

    #[test]
    fn test_to_list_of_objects() {
        let arr = Value::Array(sample_array());
        let list = arr.to_list_of_objects();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].get("n").unwrap(), &Value::Number(2));

        assert!(Value::Object(Object::new()).to_list_of_objects().is_empty());
        assert!(Value::Null.to_list_of_objects().is_empty());
        assert!(Value::from("x").to_list_of_objects().is_empty());
    }

    #[test]
    fn test_object_overwrite_keeps_position() {
        let obj = Object::from_iter([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(obj.get("a").unwrap(), &Value::Number(3));
    }

    #[test]
    fn test_object_lookup() {
        let obj = Object::from_iter([("a", "x")]);
        assert!(obj.contains("a"));
        assert!(!obj.contains("b"));
        assert!(matches!(obj.get("b"), Err(ReadError::KeyNotFound(ref k)) if k == "b"));
    }

    #[test]
    fn test_array_index_out_of_range() {
        let arr = sample_array();
        assert!(arr.get(1).is_ok());
        assert!(matches!(
            arr.get(2),
            Err(ReadError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_debug_and_display() {
        let mut obj = Object::from_iter([("a", Value::from("x")), ("b", Value::Null)]);
        obj.insert("list".into(), Value::Array(sample_array()));
        assert_eq!(
            format!("{:?}", obj),
            r#"{"a": "x", "b": null, "list": [{"n": 1}, {"n": 2}]}"#
        );
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::Number(-3).to_string(), "-3");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_tree_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
        assert_send_sync::<Object>();
    }
}
