//! Input modules
//!
//! Modules that bring data into an agent pipeline.

mod email_reader;

pub use email_reader::EmailReaderModule;
