/// Current parameter values, keyed by parameter id.
///
/// The host owns the record and mutates it between evaluations; the engine
/// only ever borrows it. Numbers and toggle labels share one map so a record
/// can be deserialized straight from a JSON object such as
/// `{"agi": 30000, "fam": 3, "dep": "Independent"}`.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Label(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Label(s) => Some(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Label(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Label(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(BTreeMap<String, Value>);

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, id: &str, value: impl Into<Value>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: &str, value: impl Into<Value>) {
        self.0.insert(id.to_string(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.0.get(id)
    }

    /// Numeric value of `id`, if present and numeric.
    pub fn number(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(Value::as_number)
    }

    /// Look up `id`, failing when the record has no entry for it.
    pub fn require(&self, id: &str) -> Result<&Value, EngineError> {
        self.get(id)
            .ok_or_else(|| EngineError::UnknownParameterId(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Conversion from a stored [`Value`] into a typed input field.
///
/// Implemented for `f64` and for enumerated types such as
/// [`Dependency`](crate::schema::params::Dependency).
pub trait FromValue: Sized {
    fn from_value(parameter: &str, value: &Value) -> Result<Self, EngineError>;
}

impl FromValue for f64 {
    fn from_value(parameter: &str, value: &Value) -> Result<Self, EngineError> {
        match value {
            Value::Number(n) if n.is_finite() => Ok(*n),
            Value::Number(n) => Err(EngineError::out_of_domain(
                parameter,
                format!("{n} is not a finite number"),
            )),
            Value::Label(s) => Err(EngineError::out_of_domain(
                parameter,
                format!("expected a number, got label {s:?}"),
            )),
        }
    }
}
