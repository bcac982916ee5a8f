//! Workflow Build Service
//!
//! Host-agnostic application services for the agent workflow builder: a
//! session that owns the workflow being edited, and the client side of the
//! build submission boundary.
//!
//! # Example
//!
//! ```ignore
//! let config = ServiceConfig::load(&data_dir).await?.with_env_overrides();
//! let submitter = HttpSubmitter::new(&config)?;
//!
//! let mut session = BuilderSession::with_builtins();
//! session.set_agent_name("My Custom Agent");
//! session.add_module("em")?;
//! println!("{}", session.preview());
//!
//! let receipt = session.submit(&submitter).await?;
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod request;
pub mod session;
pub mod submitter;

pub use config::{ConfigError, ServiceConfig};
pub use error::{Result, ServiceError};
pub use request::BuildRequest;
pub use session::BuilderSession;
pub use submitter::{HttpSubmitter, SubmitReceipt, WorkflowSubmitter};
