//! Reply Generator Module
//!
//! Drafts replies to the emails produced by the previous step.

use workflow_compiler::{ModuleCategory, ModuleDefinition, ModuleDescriptor, ParamSpec};

/// Reply Generator
///
/// # Parameters
/// - `style` (enum) - Writing style of the drafts, one of [`Self::STYLES`]
/// - `count` (number) - Number of drafts per email
pub struct ReplyGeneratorModule;

impl ReplyGeneratorModule {
    pub const TYPE: &'static str = "rg";
    pub const PARAM_STYLE: &'static str = "style";
    pub const PARAM_COUNT: &'static str = "count";

    /// Allowed writing styles, in display order
    pub const STYLES: [&'static str; 4] = ["professional", "casual", "formal", "friendly"];
}

impl ModuleDescriptor for ReplyGeneratorModule {
    fn descriptor() -> ModuleDefinition {
        ModuleDefinition::new(
            Self::TYPE,
            ModuleCategory::Processing,
            "Reply Generator",
            "generate",
        )
        .with_icon("✍️")
        .with_description("Generate AI reply drafts")
        .with_param(ParamSpec::enumeration(
            Self::PARAM_STYLE,
            "Writing Style",
            Self::STYLES,
            "professional",
        ))
        .with_param(ParamSpec::number(Self::PARAM_COUNT, "Number of Drafts", 3.0))
    }
}
