use workflow_compiler::{ModuleCategory, ModuleDefinition, ModuleDescriptor};

/// Email Categorizer
///
/// Sorts the incoming emails by priority. Takes no parameters.
pub struct EmailCategorizerModule;

impl EmailCategorizerModule {
    pub const TYPE: &'static str = "ec";
}

impl ModuleDescriptor for EmailCategorizerModule {
    fn descriptor() -> ModuleDefinition {
        ModuleDefinition::new(
            Self::TYPE,
            ModuleCategory::Processing,
            "Email Categorizer",
            "categorize",
        )
        .with_icon("🤖")
        .with_description("AI categorizes emails by priority")
    }
}
