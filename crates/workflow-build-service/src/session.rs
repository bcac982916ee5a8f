//! Builder session
//!
//! One session owns exactly one workflow for the lifetime of a builder UI.
//! Edits are synchronous; only submission touches the network. Dropping the
//! session discards the workflow.

use workflow_compiler::{
    submission_issues, Direction, InstanceId, ModuleInstance, ModuleRegistry, ParamValue,
    ScriptGenerator, ValidationError, Workflow, WorkflowBuilder,
};
use workflow_modules::global_registry;

use crate::error::Result;
use crate::request::BuildRequest;
use crate::submitter::{SubmitReceipt, WorkflowSubmitter};

/// A single builder session over one workflow
pub struct BuilderSession<'r> {
    builder: WorkflowBuilder<'r>,
}

impl BuilderSession<'static> {
    /// Start a session against the built-in module catalog
    pub fn with_builtins() -> Self {
        Self::new(global_registry())
    }
}

impl<'r> BuilderSession<'r> {
    /// Start a session with an empty workflow
    pub fn new(registry: &'r ModuleRegistry) -> Self {
        Self {
            builder: WorkflowBuilder::new(registry),
        }
    }

    pub fn workflow(&self) -> &Workflow {
        self.builder.workflow()
    }

    pub fn registry(&self) -> &'r ModuleRegistry {
        self.builder.registry()
    }

    pub fn add_module(&mut self, module_type: &str) -> workflow_compiler::Result<InstanceId> {
        self.builder.add_module(module_type)
    }

    pub fn remove_module(&mut self, index: usize) -> workflow_compiler::Result<ModuleInstance> {
        self.builder.remove_module(index)
    }

    pub fn move_module(&mut self, index: usize, direction: Direction) -> bool {
        self.builder.move_module(index, direction)
    }

    pub fn update_module_config(
        &mut self,
        index: usize,
        key: &str,
        value: impl Into<ParamValue>,
    ) -> workflow_compiler::Result<()> {
        self.builder.update_module_config(index, key, value)
    }

    pub fn set_agent_name(&mut self, name: impl Into<String>) {
        self.builder.set_agent_name(name);
    }

    pub fn reset(&mut self) {
        self.builder.reset();
    }

    /// Render the current script, exactly as it would be submitted
    pub fn preview(&self) -> String {
        ScriptGenerator::new(self.builder.registry()).generate(self.builder.workflow())
    }

    /// Every reason the workflow cannot be submitted yet
    pub fn issues(&self) -> Vec<ValidationError> {
        submission_issues(self.builder.workflow())
    }

    /// Whether the workflow passes submission checks
    pub fn is_ready(&self) -> bool {
        self.issues().is_empty()
    }

    /// Validate and assemble the build request
    pub fn build_request(&self) -> Result<BuildRequest> {
        let generator = ScriptGenerator::new(self.builder.registry());
        Ok(BuildRequest::prepare(self.builder.workflow(), &generator)?)
    }

    /// Validate the workflow and hand it to the backend
    ///
    /// Failures are returned unchanged; the session keeps its workflow either way.
    pub async fn submit(&self, submitter: &dyn WorkflowSubmitter) -> Result<SubmitReceipt> {
        let request = self.build_request()?;
        let receipt = submitter.submit(&request).await?;
        log::info!(
            "Build for '{}' accepted with status {}",
            request.agent_name,
            receipt.status
        );
        Ok(receipt)
    }
}
