//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! All configuration is loaded once at startup and carried here; handlers
//! never read the environment per request. Missing credentials are modeled
//! as `None` so the cron route can answer with a misconfiguration status
//! instead of the process refusing to boot.

use std::sync::Arc;

use crate::github::{DispatchTarget, WorkflowDispatch};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Shared secret for the cron trigger. `None` if `CRON_SECRET` is unset.
    pub cron_secret: Option<String>,
    /// Workflow dispatcher. `None` if `GITHUB_PAT` is unset.
    pub dispatcher: Option<Arc<dyn WorkflowDispatch>>,
    /// The workflow the cron trigger re-dispatches. Fixed at build time.
    pub target: DispatchTarget,
}

impl AppState {
    #[must_use]
    pub fn new(
        cron_secret: Option<String>,
        dispatcher: Option<Arc<dyn WorkflowDispatch>>,
        target: DispatchTarget,
    ) -> Self {
        Self { cron_secret, dispatcher, target }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_carries_fixed_target() {
        let state = test_helpers::test_app_state(Some("s3cret"), None);
        assert_eq!(state.target, DispatchTarget::review_rebuild());
        assert_eq!(state.cron_secret.as_deref(), Some("s3cret"));
        assert!(state.dispatcher.is_none());
    }

    #[test]
    fn state_without_secret() {
        let state = test_helpers::test_app_state(None, None);
        assert!(state.cron_secret.is_none());
    }
}
