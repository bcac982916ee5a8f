//! Workflow builder
//!
//! Holds the workflow under construction and applies user edits to it.
//! Every operation either succeeds completely or returns an error with the
//! workflow untouched.
//!
//! # Example
//!
//! ```ignore
//! let mut builder = WorkflowBuilder::new(&registry);
//! builder.set_agent_name("My Custom Agent");
//! builder.add_module("em")?;
//! builder.add_module("rg")?;
//! builder.update_module_config(1, "style", "casual")?;
//! builder.move_module(1, Direction::Up);
//! ```

use crate::descriptor::ModuleDefinition;
use crate::error::{CompilerError, Result};
use crate::registry::ModuleRegistry;
use crate::types::{Direction, InstanceId, ModuleInstance, ParamKind, ParamValue, Workflow};

/// Mutable builder over a single workflow
///
/// Instance ids come from a counter owned by the builder, so ids stay unique
/// for the whole session even across removals and resets.
pub struct WorkflowBuilder<'r> {
    registry: &'r ModuleRegistry,
    workflow: Workflow,
    instance_counter: u64,
}

impl<'r> WorkflowBuilder<'r> {
    /// Create a builder with an empty, unnamed workflow
    pub fn new(registry: &'r ModuleRegistry) -> Self {
        Self {
            registry,
            workflow: Workflow::new(),
            instance_counter: 0,
        }
    }

    /// The registry this builder resolves module types against
    pub fn registry(&self) -> &'r ModuleRegistry {
        self.registry
    }

    /// Current workflow state
    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// Consume the builder, handing off the workflow
    pub fn into_workflow(self) -> Workflow {
        self.workflow
    }

    pub fn len(&self) -> usize {
        self.workflow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflow.is_empty()
    }

    /// Get the module at a position
    pub fn module(&self, index: usize) -> Option<&ModuleInstance> {
        self.workflow.modules.get(index)
    }

    /// Append a new instance of a module type, seeded with its defaults
    ///
    /// Returns the new instance's id.
    pub fn add_module(&mut self, module_type: &str) -> Result<InstanceId> {
        let definition = self.registry.lookup(module_type)?;

        self.instance_counter += 1;
        let id = format!("{}-{}", definition.module_type, self.instance_counter);

        self.workflow.modules.push(ModuleInstance {
            id: id.clone(),
            module_type: definition.module_type.clone(),
            config: definition.default_config(),
        });

        log::debug!(
            "Added module {} at position {}",
            id,
            self.workflow.modules.len() - 1
        );
        Ok(id)
    }

    /// Remove the module at a position; later modules shift down by one
    pub fn remove_module(&mut self, index: usize) -> Result<ModuleInstance> {
        self.check_index(index)?;
        let removed = self.workflow.modules.remove(index);
        log::debug!("Removed module {} from position {}", removed.id, index);
        Ok(removed)
    }

    /// Swap the module at `index` with its neighbour in `direction`
    ///
    /// Moving past either end is a no-op. Returns whether anything moved.
    pub fn move_module(&mut self, index: usize, direction: Direction) -> bool {
        let len = self.workflow.modules.len();
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };

        match target {
            Some(target) if index < len && target < len => {
                self.workflow.modules.swap(index, target);
                log::debug!("Moved module from position {} to {}", index, target);
                true
            }
            _ => false,
        }
    }

    /// Replace one parameter value of the module at a position
    ///
    /// Numeric input must already be parsed into a number; passing text for a
    /// numeric parameter is a caller bug and is rejected with `TypeMismatch`.
    pub fn update_module_config(
        &mut self,
        index: usize,
        key: &str,
        value: impl Into<ParamValue>,
    ) -> Result<()> {
        self.check_index(index)?;
        let value = value.into();

        let instance = &self.workflow.modules[index];
        let definition = self.registry.lookup(&instance.module_type)?;
        check_value(definition, key, &value)?;

        self.workflow.modules[index].config.insert(key, value);
        log::debug!("Updated '{}' on module at position {}", key, index);
        Ok(())
    }

    /// Replace the agent name verbatim
    pub fn set_agent_name(&mut self, name: impl Into<String>) {
        self.workflow.agent_name = name.into();
    }

    /// Discard all modules and the agent name
    pub fn reset(&mut self) {
        self.workflow = Workflow::new();
        log::debug!("Workflow reset");
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.workflow.modules.len();
        if index < len {
            Ok(())
        } else {
            Err(CompilerError::out_of_range(index, len))
        }
    }
}

/// Characters a quoted script value cannot carry
const FORBIDDEN_CHARS: [char; 3] = ['"', '\n', '\r'];

/// Validate a value against the named parameter of a definition
fn check_value(definition: &ModuleDefinition, key: &str, value: &ParamValue) -> Result<()> {
    let spec = definition
        .param(key)
        .ok_or_else(|| CompilerError::UnknownParameterKey {
            module_type: definition.module_type.clone(),
            key: key.to_string(),
        })?;

    if !spec.kind.accepts(value) {
        return Err(CompilerError::TypeMismatch {
            key: key.to_string(),
            expected: spec.kind,
            found: value.type_name(),
        });
    }

    let forbidden = value
        .as_str()
        .and_then(|s| s.chars().find(|c| FORBIDDEN_CHARS.contains(c)));
    if let Some(found) = forbidden {
        return Err(CompilerError::InvalidValue {
            key: key.to_string(),
            found,
        });
    }

    if spec.kind == ParamKind::Enum && !spec.admits(value) {
        return Err(CompilerError::InvalidOption {
            key: key.to_string(),
            value: value.as_str().unwrap_or_default().to_string(),
        });
    }

    Ok(())
}
