//! Request parameter mapping
//!
//! [`Params`] is an ordered map keyed by parameter name. Iteration is always in
//! ascending byte-wise key order, which is the order the signer canonicalizes
//! in, so the order parameters were inserted in never matters.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// A single request parameter value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// Text value
    Text(String),
    /// Integer value, rendered in decimal
    Number(i64),
    /// Explicitly present key with no value; rendered as empty text
    Absent,
}

impl ParamValue {
    /// Text form used both for signing and on the wire
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Absent => Cow::Borrowed(""),
        }
    }

    /// Returns true for [`ParamValue::Absent`]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => serializer.serialize_i64(*n),
            Self::Absent => serializer.serialize_str(""),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Self::Number)
            .unwrap_or_else(|_| Self::Text(value.to_string()))
    }
}

/// Request parameters keyed by name
///
/// Each request builds its own `Params`; containers are never shared between
/// calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the previous value for that key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert a parameter only when a value was supplied
    ///
    /// `None` leaves the key out entirely.
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Builder form of [`Params::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no parameters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in ascending key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Iterate over keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_sorted_by_key() {
        let params: Params = [("symbol", "ethbtc"), ("pageSize", "20"), ("page", "1")]
            .into_iter()
            .collect();

        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["page", "pageSize", "symbol"]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let params = Params::new().with("b", 1).with("B", 2).with("a", 3);
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["B", "a", "b"]);
    }

    #[test]
    fn test_insert_opt_skips_none() {
        let mut params = Params::new();
        params.insert_opt("page", None::<u32>);
        params.insert_opt("pageSize", Some(50u32));

        assert!(!params.contains_key("page"));
        assert_eq!(params.get("pageSize"), Some(&ParamValue::Number(50)));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(ParamValue::from("abc").as_text(), "abc");
        assert_eq!(ParamValue::from(0u32).as_text(), "0");
        assert_eq!(ParamValue::from(-12i64).as_text(), "-12");
        assert_eq!(ParamValue::Absent.as_text(), "");
        assert_eq!(ParamValue::from(u64::MAX).as_text(), u64::MAX.to_string());
    }

    #[test]
    fn test_serialize_as_flat_map() {
        let params = Params::new()
            .with("symbol", "ethbtc")
            .with("period", 5u32)
            .with("page", ParamValue::Absent);

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": "", "period": 5, "symbol": "ethbtc"})
        );
    }

    #[test]
    fn test_insert_overwrites() {
        let mut params = Params::new().with("time", "1");
        let previous = params.insert("time", "2");
        assert_eq!(previous, Some(ParamValue::from("1")));
        assert_eq!(params.len(), 1);
    }
}
