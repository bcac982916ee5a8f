//! Module descriptor trait and definition types
//!
//! A built-in module describes itself through `ModuleDescriptor`: its type
//! id, presentation metadata, the action verb it compiles to, and its
//! parameter schema. The registry is assembled from these definitions.

use serde::{Deserialize, Serialize};

use crate::types::{ModuleCategory, ModuleConfig, ParamKind, ParamValue};

/// Trait for modules that can describe their definition
///
/// # Example
///
/// ```ignore
/// use workflow_compiler::{ModuleCategory, ModuleDefinition, ModuleDescriptor, ParamSpec};
///
/// impl ModuleDescriptor for EmailReader {
///     fn descriptor() -> ModuleDefinition {
///         ModuleDefinition::new("em", ModuleCategory::Input, "Email Reader", "scan")
///             .with_icon("📧")
///             .with_param(ParamSpec::string("query", "Search Query", "is:unread"))
///             .with_param(ParamSpec::number("max", "Max Emails", 50.0))
///     }
/// }
/// ```
pub trait ModuleDescriptor {
    /// Get the static definition for this module type
    fn descriptor() -> ModuleDefinition
    where
        Self: Sized;
}

/// Complete definition of a module type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    /// Unique short type identifier (e.g., "em")
    pub module_type: String,
    /// Category for palette grouping
    pub category: ModuleCategory,
    /// Human-readable name
    pub display_name: String,
    /// Icon shown next to the name
    pub icon: String,
    /// What the module does
    pub description: String,
    /// Verb emitted into the generated script (e.g., "scan")
    pub action_name: String,
    /// Parameter schema in declaration order
    pub params: Vec<ParamSpec>,
}

impl ModuleDefinition {
    /// Create a definition with no parameters
    pub fn new(
        module_type: impl Into<String>,
        category: ModuleCategory,
        display_name: impl Into<String>,
        action_name: impl Into<String>,
    ) -> Self {
        Self {
            module_type: module_type.into(),
            category,
            display_name: display_name.into(),
            icon: String::new(),
            description: String::new(),
            action_name: action_name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a parameter to the schema
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Look up a parameter spec by key
    pub fn param(&self, key: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.key == key)
    }

    /// A fresh config holding every parameter's default, in schema order
    pub fn default_config(&self) -> ModuleConfig {
        self.params
            .iter()
            .map(|p| (p.key.clone(), p.default_value.clone()))
            .collect()
    }
}

/// Schema entry for one module parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    /// Config key (also the script token name)
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Value kind
    pub kind: ParamKind,
    /// Value seeded into new instances
    pub default_value: ParamValue,
    /// Allowed values, only for `ParamKind::Enum`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_options: Vec<String>,
    /// Input hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl ParamSpec {
    /// Create a free-text parameter
    pub fn string(key: impl Into<String>, label: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ParamKind::String,
            default_value: ParamValue::Text(default.into()),
            enum_options: Vec::new(),
            placeholder: None,
        }
    }

    /// Create a numeric parameter
    pub fn number(key: impl Into<String>, label: impl Into<String>, default: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ParamKind::Number,
            default_value: ParamValue::Number(default),
            enum_options: Vec::new(),
            placeholder: None,
        }
    }

    /// Create a parameter restricted to a fixed set of options
    pub fn enumeration<I, S>(
        key: impl Into<String>,
        label: impl Into<String>,
        options: I,
        default: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ParamKind::Enum,
            default_value: ParamValue::Text(default.into()),
            enum_options: options.into_iter().map(Into::into).collect(),
            placeholder: None,
        }
    }

    /// Set the input hint
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Check a value against this parameter's kind and, for enums, its options
    pub fn admits(&self, value: &ParamValue) -> bool {
        if !self.kind.accepts(value) {
            return false;
        }
        match (self.kind, value) {
            (ParamKind::Enum, ParamValue::Text(s)) => self.enum_options.iter().any(|o| o == s),
            _ => true,
        }
    }
}
