//! Filter parameters for list operations.
//!
//! A [`FilterSpec`] is an insertion-ordered map from field name to
//! [`FilterValue`]. It serializes to query pairs in exactly the order the
//! caller built it, so two identical specs always yield the same query string.

use chrono::NaiveDate;

use crate::Error;

/// Comparison applied to a filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FilterOp::Eq => "eq",
                FilterOp::NotEq => "ne",
                FilterOp::Gt => "gt",
                FilterOp::Gte => "gte",
                FilterOp::Lt => "lt",
                FilterOp::Lte => "lte",
                FilterOp::Like => "like",
            }
        )?;
        Ok(())
    }
}

/// A single filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Sent as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// An untyped value, checked when the filter is serialized. Only strings,
    /// numbers and booleans are accepted.
    Json(serde_json::Value),
    /// An operator-tagged value, sent as `key[op]=value`.
    Op(FilterOp, Box<FilterValue>),
}

impl FilterValue {
    pub fn op(op: FilterOp, value: impl Into<FilterValue>) -> Self {
        FilterValue::Op(op, Box::new(value.into()))
    }

    fn scalar_to_string(&self, key: &str) -> Result<String, Error> {
        match self {
            FilterValue::Text(s) => Ok(s.clone()),
            FilterValue::Integer(i) => Ok(i.to_string()),
            FilterValue::Float(f) if f.is_finite() => Ok(f.to_string()),
            FilterValue::Float(f) => Err(Error::configuration(format!(
                "filter `{}` has non-finite value {}",
                key, f
            ))),
            FilterValue::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
            FilterValue::Date(d) => Ok(d.format("%Y-%m-%d").to_string()),
            FilterValue::Json(value) => match value {
                serde_json::Value::String(s) => Ok(s.clone()),
                serde_json::Value::Number(n) => Ok(n.to_string()),
                serde_json::Value::Bool(b) => FilterValue::Bool(*b).scalar_to_string(key),
                other => Err(Error::configuration(format!(
                    "filter `{}` has unsupported value type `{}`",
                    key,
                    json_type_name(other)
                ))),
            },
            FilterValue::Op(..) => Err(Error::configuration(format!(
                "filter `{}` nests an operator inside an operator",
                key
            ))),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Integer(value.into())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Integer(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        FilterValue::Date(value)
    }
}

impl From<serde_json::Value> for FilterValue {
    fn from(value: serde_json::Value) -> Self {
        FilterValue::Json(value)
    }
}

/// Insertion-ordered set of filter fields. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    fields: Vec<(String, FilterValue)>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_op(
        mut self,
        key: impl Into<String>,
        op: FilterOp,
        value: impl Into<FilterValue>,
    ) -> Self {
        self.insert(key, FilterValue::op(op, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serializes to query pairs in insertion order.
    ///
    /// Fails with a configuration error on an empty key or a value the
    /// vendor cannot receive (null, arrays, objects, non-finite floats,
    /// nested operators).
    pub fn to_query_pairs(&self) -> Result<Vec<(String, String)>, Error> {
        let mut pairs = Vec::with_capacity(self.fields.len());
        for (key, value) in &self.fields {
            if key.is_empty() {
                return Err(Error::configuration("filter key must not be empty"));
            }
            match value {
                FilterValue::Op(op, inner) => {
                    pairs.push((format!("{}[{}]", key, op), inner.scalar_to_string(key)?));
                }
                scalar => pairs.push((key.clone(), scalar.scalar_to_string(key)?)),
            }
        }
        Ok(pairs)
    }
}

impl<K, V> FromIterator<(K, V)> for FilterSpec
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut spec = FilterSpec::new();
        for (key, value) in iter {
            spec.insert(key, value);
        }
        spec
    }
}
