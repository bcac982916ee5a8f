//! Processing modules
//!
//! Modules that analyse or transform the previous step's result.

mod email_categorizer;
mod reply_generator;
mod summarizer;

pub use email_categorizer::EmailCategorizerModule;
pub use reply_generator::ReplyGeneratorModule;
pub use summarizer::SummarizerModule;
