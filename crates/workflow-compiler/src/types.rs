//! Core types for agent workflows
//!
//! These types define the structure of a workflow under construction:
//! parameter kinds and values, module instances, and the workflow itself.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a module type in the registry (e.g. "em")
pub type ModuleType = String;

/// Unique identifier for a module instance within a workflow
pub type InstanceId = String;

/// The kind of value a module parameter holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Free-form text
    String,
    /// Finite numeric value
    Number,
    /// One of a fixed, ordered set of strings
    Enum,
}

impl ParamKind {
    /// Check whether a value has the runtime type this kind requires
    ///
    /// Enum membership is not checked here; that needs the parameter's options.
    pub fn accepts(&self, value: &ParamValue) -> bool {
        match (self, value) {
            (ParamKind::String | ParamKind::Enum, ParamValue::Text(_)) => true,
            (ParamKind::Number, ParamValue::Number(n)) => n.is_finite(),
            _ => false,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::String => write!(f, "string"),
            ParamKind::Number => write!(f, "number"),
            ParamKind::Enum => write!(f, "enum"),
        }
    }
}

/// A typed parameter value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Get the value as a string slice, if it is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }

    /// Get the value as a number, if it is numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    /// Short name of the runtime type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Text(_) => "string",
            ParamValue::Number(n) if n.is_finite() => "number",
            ParamValue::Number(_) => "non-finite number",
        }
    }

    /// Integral view of a number when it fits losslessly in an i64
    fn as_integral(n: f64) -> Option<i64> {
        // 2^53: beyond this not every integer is representable
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT {
            Some(n as i64)
        } else {
            None
        }
    }

    /// Canonical decimal form of a number: `50`, `2.5`, `-3`
    pub fn canonical_number(n: f64) -> String {
        match Self::as_integral(n) {
            Some(i) => i.to_string(),
            None => n.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Text(s) => serializer.serialize_str(s),
            ParamValue::Number(n) => match Self::as_integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
        }
    }
}

/// Parameter values of one module instance, kept in schema order
///
/// Entries are seeded from the module's parameter schema when the instance
/// is created; later updates replace values in place, so iteration order
/// always matches the schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleConfig {
    entries: Vec<(String, ParamValue)>,
}

impl ModuleConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Insert or replace a value, keeping the position of an existing key
    ///
    /// Returns the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) -> Option<ParamValue> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ModuleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ModuleConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = ModuleConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter keys to string or number values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut config = ModuleConfig::new();
                while let Some((key, value)) = access.next_entry::<String, ParamValue>()? {
                    config.insert(key, value);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ModuleConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = ModuleConfig::new();
        for (k, v) in iter {
            config.insert(k, v.into());
        }
        config
    }
}

/// Category used to group modules in a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleCategory {
    /// Modules that bring data into the agent
    Input,
    /// Modules that transform or analyse data
    Processing,
    /// Modules that act on the outside world
    Output,
}

/// A module placed in a workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInstance {
    /// Unique within the owning workflow, never reassigned
    pub id: InstanceId,
    /// Registry key of this module's definition
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Current parameter values
    pub config: ModuleConfig,
}

/// An ordered, named sequence of module instances
///
/// Order is significant: each module consumes the result of the one before it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Free-form name, slugified into the script header
    pub agent_name: String,
    /// Modules in execution order
    pub modules: Vec<ModuleInstance>,
}

impl Workflow {
    /// Create an empty, unnamed workflow
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Direction of an adjacent swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}
