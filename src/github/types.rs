//! Workflow dispatch types — error taxonomy and the dispatcher trait.

use super::config::DispatchTarget;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by workflow dispatch operations.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The required access token environment variable is not set.
    #[error("missing access token: env var {var} not set")]
    MissingToken { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The outbound request failed before a response arrived — network
    /// error, or the client-side timeout fired and aborted the call.
    #[error("dispatch request failed: {0}")]
    Transport(String),

    /// GitHub answered, but with a non-success status.
    #[error("dispatch rejected: status {status}")]
    Upstream { status: u16, body: String },
}

// =============================================================================
// DISPATCH TRAIT
// =============================================================================

/// Narrow async interface over the workflow-dispatch API. Enables mocking
/// in tests.
#[async_trait::async_trait]
pub trait WorkflowDispatch: Send + Sync {
    /// Trigger one run of the target workflow.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] on transport failure, timeout, or a
    /// non-success upstream status.
    async fn dispatch_workflow(&self, target: &DispatchTarget) -> Result<(), DispatchError>;
}
