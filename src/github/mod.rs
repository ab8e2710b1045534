//! GitHub — workflow-dispatch adapter for the scheduled review rebuild.
//!
//! DESIGN
//! ======
//! The cron route never talks to GitHub directly; it goes through the
//! [`WorkflowDispatch`] trait so its branching logic is testable without
//! network access. [`GitHubDispatcher`] is the one real implementation,
//! configured from environment variables at startup.

pub mod client;
pub mod config;
pub mod types;

pub use client::GitHubDispatcher;
pub use config::{DispatchConfig, DispatchTarget};
pub use types::{DispatchError, WorkflowDispatch};
