//! Submission validation
//!
//! Checks a workflow before it is handed to the build backend. Per-parameter
//! correctness is not re-checked here: the builder never lets an ill-typed
//! value into a workflow.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::Workflow;

/// Reasons a workflow cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The agent name is empty or whitespace
    #[error("Agent name is empty")]
    EmptyAgentName,

    /// The workflow has no modules
    #[error("Workflow has no modules")]
    EmptyWorkflow,

    /// A module type appears more than once, making `$<type>.result` ambiguous
    #[error("Module type '{module_type}' is used more than once")]
    DuplicateModuleType { module_type: String },
}

/// Validate a workflow for submission, returning the first problem found
///
/// Checks run in order: agent name, module count, duplicate module types.
pub fn validate_for_submission(workflow: &Workflow) -> Result<(), ValidationError> {
    match submission_issues(workflow).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collect every submission problem (not just the first)
///
/// Useful for showing all blocking messages at once.
pub fn submission_issues(workflow: &Workflow) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if workflow.agent_name.trim().is_empty() {
        errors.push(ValidationError::EmptyAgentName);
    }

    if workflow.modules.is_empty() {
        errors.push(ValidationError::EmptyWorkflow);
    }

    detect_duplicate_types(workflow, &mut errors);

    errors
}

/// Report each module type that occurs more than once, in first-repeat order
fn detect_duplicate_types(workflow: &Workflow, errors: &mut Vec<ValidationError>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();

    for module in &workflow.modules {
        let module_type = module.module_type.as_str();
        if !seen.insert(module_type) && reported.insert(module_type) {
            errors.push(ValidationError::DuplicateModuleType {
                module_type: module_type.to_string(),
            });
        }
    }
}
