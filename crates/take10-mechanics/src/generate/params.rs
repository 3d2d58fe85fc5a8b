//! Open-ended, strategy-specific generation parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MechError, MechResult};

/// Named parameters passed through to a score generator.
///
/// The built-in strategies ignore them; custom strategies read whatever
/// keys they define.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationParams {
    values: BTreeMap<String, Value>,
}

impl GenerationParams {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a parameter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up an integer parameter.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlay `other` on top of this set; its keys win.
    pub fn merge(&mut self, other: GenerationParams) {
        self.values.extend(other.values);
    }

    /// Parse a `key=value` assignment.
    ///
    /// The value is read as JSON when it parses as JSON, otherwise it is
    /// kept as a plain string.
    pub fn parse_assignment(s: &str) -> MechResult<(String, Value)> {
        let (key, raw) = s
            .split_once('=')
            .ok_or_else(|| MechError::InvalidConfig(format!("expected key=value, got '{s}'")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(MechError::InvalidConfig(format!(
                "missing parameter name in '{s}'"
            )));
        }
        let raw = raw.trim();
        let value =
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok((key.to_string(), value))
    }
}

impl FromIterator<(String, Value)> for GenerationParams {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
