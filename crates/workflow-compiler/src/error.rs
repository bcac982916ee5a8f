//! Error types for the workflow compiler

use thiserror::Error;

use crate::types::ParamKind;

/// Result type alias using CompilerError
pub type Result<T> = std::result::Result<T, CompilerError>;

/// Errors raised by registry lookups and workflow builder operations
///
/// None of these leave the workflow modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompilerError {
    /// The type id is not in the module catalog
    #[error("Unknown module type: {0}")]
    UnknownModuleType(String),

    /// No module at this position
    #[error("Index {index} out of range for workflow of {len} modules")]
    IndexOutOfRange { index: usize, len: usize },

    /// The key is not part of the module's parameter schema
    #[error("Module '{module_type}' has no parameter '{key}'")]
    UnknownParameterKey { module_type: String, key: String },

    /// The value's runtime type does not match the parameter kind
    #[error("Parameter '{key}' expects a {expected} value, got {found}")]
    TypeMismatch {
        key: String,
        expected: ParamKind,
        found: &'static str,
    },

    /// The value is not one of the enum parameter's options
    #[error("'{value}' is not a valid option for parameter '{key}'")]
    InvalidOption { key: String, value: String },

    /// The string contains a character that would break the script line
    #[error("Parameter '{key}' contains a forbidden character {found:?}")]
    InvalidValue { key: String, found: char },
}

/// Defects in a module catalog, detected when the registry is built
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("Module type '{0}' is defined more than once")]
    DuplicateModuleType(String),

    #[error("Module '{module_type}' declares parameter '{key}' more than once")]
    DuplicateParameterKey { module_type: String, key: String },

    #[error("Enum parameter '{key}' of module '{module_type}' has no options")]
    EmptyEnumOptions { module_type: String, key: String },

    #[error("Default value of parameter '{key}' of module '{module_type}' does not match its schema")]
    InvalidDefault { module_type: String, key: String },
}

impl CompilerError {
    /// Create an index error for a workflow of the given length
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
