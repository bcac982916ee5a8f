use workflow_compiler::{ModuleCategory, ModuleDefinition, ModuleDescriptor, ParamSpec};

/// Summarizer
///
/// Condenses long emails. `max_length` caps the summary length.
pub struct SummarizerModule;

impl SummarizerModule {
    pub const TYPE: &'static str = "su";
    pub const PARAM_MAX_LENGTH: &'static str = "max_length";
}

impl ModuleDescriptor for SummarizerModule {
    fn descriptor() -> ModuleDefinition {
        ModuleDefinition::new(Self::TYPE, ModuleCategory::Processing, "Summarizer", "summarize")
            .with_icon("📝")
            .with_description("Summarize long emails")
            .with_param(ParamSpec::number(
                Self::PARAM_MAX_LENGTH,
                "Max Summary Length",
                200.0,
            ))
    }
}
