use workflow_compiler::{ModuleCategory, ModuleDefinition, ModuleDescriptor};

/// Email Sender
///
/// Sends the emails produced by the previous step. Takes no parameters.
pub struct EmailSenderModule;

impl EmailSenderModule {
    pub const TYPE: &'static str = "es";
}

impl ModuleDescriptor for EmailSenderModule {
    fn descriptor() -> ModuleDefinition {
        ModuleDefinition::new(Self::TYPE, ModuleCategory::Output, "Email Sender", "send")
            .with_icon("📤")
            .with_description("Send emails")
    }
}
