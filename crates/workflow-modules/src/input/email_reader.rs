//! Email Reader Module
//!
//! Entry point of most mail pipelines: fetches messages from the user's
//! mailbox. Compiles to the `scan` action.

use workflow_compiler::{ModuleCategory, ModuleDefinition, ModuleDescriptor, ParamSpec};

/// Email Reader
///
/// # Parameters
/// - `query` (string) - Mailbox search query, defaults to `is:unread`
/// - `max` (number) - Maximum number of emails to fetch, defaults to 50
pub struct EmailReaderModule;

impl EmailReaderModule {
    pub const TYPE: &'static str = "em";
    pub const PARAM_QUERY: &'static str = "query";
    pub const PARAM_MAX: &'static str = "max";
}

impl ModuleDescriptor for EmailReaderModule {
    fn descriptor() -> ModuleDefinition {
        ModuleDefinition::new(Self::TYPE, ModuleCategory::Input, "Email Reader", "scan")
            .with_icon("📧")
            .with_description("Fetch emails from Gmail/Outlook")
            .with_param(
                ParamSpec::string(Self::PARAM_QUERY, "Search Query", "is:unread")
                    .with_placeholder("is:unread"),
            )
            .with_param(ParamSpec::number(Self::PARAM_MAX, "Max Emails", 50.0))
    }
}
