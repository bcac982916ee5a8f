//! Workflow Modules
//!
//! The built-in module catalog for the agent workflow builder.
//! Each module is a typed, parameterized step a user can add to a workflow.
//!
//! # Categories
//!
//! - **Input**: Modules that fetch data (email reader)
//! - **Processing**: Modules that analyse or transform data (categorizer, reply generator, summarizer)
//! - **Output**: Modules that act on results (email sender, notifier)
//!
//! The catalog is fixed at build time. [`global_registry`] exposes it as a
//! process-wide, read-only [`ModuleRegistry`].

use once_cell::sync::Lazy;
use workflow_compiler::{ModuleDefinition, ModuleDescriptor, ModuleRegistry, RegistryError};

pub mod input;
pub mod output;
pub mod processing;

pub use input::*;
pub use output::*;
pub use processing::*;

/// Built-in module definitions in catalog order
pub fn builtin_definitions() -> Vec<ModuleDefinition> {
    vec![
        EmailReaderModule::descriptor(),
        EmailCategorizerModule::descriptor(),
        ReplyGeneratorModule::descriptor(),
        EmailSenderModule::descriptor(),
        SummarizerModule::descriptor(),
        NotifierModule::descriptor(),
    ]
}

/// Build a fresh registry holding the built-in catalog
pub fn builtin_registry() -> Result<ModuleRegistry, RegistryError> {
    ModuleRegistry::from_definitions(builtin_definitions())
}

static GLOBAL_REGISTRY: Lazy<ModuleRegistry> = Lazy::new(|| {
    let registry = builtin_registry().expect("built-in module catalog must be well-formed");
    log::debug!("Module catalog initialized with {} modules", registry.len());
    registry
});

/// The process-wide module registry, initialized on first use
pub fn global_registry() -> &'static ModuleRegistry {
    &GLOBAL_REGISTRY
}
