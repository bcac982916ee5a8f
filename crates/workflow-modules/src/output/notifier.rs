//! Notifier Module
//!
//! Raises a desktop notification when the pipeline reaches it.

use workflow_compiler::{ModuleCategory, ModuleDefinition, ModuleDescriptor, ParamSpec};

/// Notifier
///
/// # Parameters
/// - `message` (string) - Notification text
pub struct NotifierModule;

impl NotifierModule {
    pub const TYPE: &'static str = "nf";
    pub const PARAM_MESSAGE: &'static str = "message";
}

impl ModuleDescriptor for NotifierModule {
    fn descriptor() -> ModuleDefinition {
        ModuleDefinition::new(Self::TYPE, ModuleCategory::Output, "Notifier", "notify")
            .with_icon("🔔")
            .with_description("Desktop notifications")
            .with_param(
                ParamSpec::string(Self::PARAM_MESSAGE, "Notification Message", "Agent completed!")
                    .with_placeholder("Your message"),
            )
    }
}
