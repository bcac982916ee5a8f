//! Build request payload
//!
//! The structured module list travels alongside the generated script so the
//! backend receives both views of the same workflow.

use serde::{Deserialize, Serialize};
use workflow_compiler::{
    validate_for_submission, ModuleInstance, ScriptGenerator, ValidationError, Workflow,
};

/// Payload posted to the build endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Agent name exactly as the user typed it
    pub agent_name: String,
    /// Modules in execution order
    pub modules: Vec<ModuleInstance>,
    /// Generated agent script
    pub workflow_code: String,
}

impl BuildRequest {
    /// Validate a workflow and pair it with its generated script
    pub fn prepare(
        workflow: &Workflow,
        generator: &ScriptGenerator<'_>,
    ) -> Result<Self, ValidationError> {
        validate_for_submission(workflow)?;

        Ok(Self {
            agent_name: workflow.agent_name.clone(),
            modules: workflow.modules.clone(),
            workflow_code: generator.generate(workflow),
        })
    }
}
