//! Workflow Compiler - agent scripts from ordered module pipelines
//!
//! A user composes an ordered sequence of typed modules, each with a
//! parameter schema; this crate compiles that sequence into the textual
//! agent script the execution engine consumes.
//!
//! # Architecture
//!
//! - `ModuleRegistry`: immutable catalog of `ModuleDefinition`s
//! - `WorkflowBuilder`: the workflow under construction and its edit operations
//! - `ScriptGenerator`: deterministic rendering of a workflow into script text
//! - `validation`: checks applied at the submission boundary
//!
//! # Example
//!
//! ```ignore
//! let mut builder = WorkflowBuilder::new(&registry);
//! builder.set_agent_name("My Custom Agent");
//! builder.add_module("em")?;
//!
//! validate_for_submission(builder.workflow())?;
//! let script = ScriptGenerator::new(&registry).generate(builder.workflow());
//! ```

pub mod builder;
pub mod codegen;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

// Re-export key types
pub use builder::WorkflowBuilder;
pub use codegen::{slugify, ScriptGenerator, SCRIPT_TIER, SCRIPT_VERSION};
pub use descriptor::{ModuleDefinition, ModuleDescriptor, ParamSpec};
pub use error::{CompilerError, RegistryError, Result};
pub use registry::ModuleRegistry;
pub use types::{
    Direction, InstanceId, ModuleCategory, ModuleConfig, ModuleInstance, ModuleType, ParamKind,
    ParamValue, Workflow,
};
pub use validation::{submission_issues, validate_for_submission, ValidationError};
