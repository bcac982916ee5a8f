//! Output modules
//!
//! Modules that act on the outside world with the pipeline's result.

mod email_sender;
mod notifier;

pub use email_sender::EmailSenderModule;
pub use notifier::NotifierModule;
