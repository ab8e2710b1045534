//! Dispatch configuration parsed from environment variables.

use super::types::DispatchError;

pub const DEFAULT_DISPATCH_TIMEOUT_MS: u64 = 8000;

// =============================================================================
// TARGET
// =============================================================================

/// The (owner, repo, workflow-file, ref) tuple a dispatch runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTarget {
    pub owner: String,
    pub repo: String,
    pub workflow_file: String,
    pub git_ref: String,
}

impl DispatchTarget {
    /// The scheduled review-deck rebuild workflow. Baked in at build time;
    /// the cron endpoint dispatches nothing else.
    #[must_use]
    pub fn review_rebuild() -> Self {
        Self {
            owner: "kotoba-app".into(),
            repo: "kotoba".into(),
            workflow_file: "rebuild-review-decks.yml".into(),
            git_ref: "main".into(),
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Outbound dispatch configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// GitHub access token with workflow write scope on the target repo.
    pub token: String,
    /// Hard client-side timeout for the dispatch call, in milliseconds.
    pub timeout_ms: u64,
}

impl DispatchConfig {
    /// Build typed dispatch config from environment variables.
    ///
    /// Required:
    /// - `GITHUB_PAT`
    ///
    /// Optional:
    /// - `DISPATCH_TIMEOUT_MS`: default 8000
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingToken`] if `GITHUB_PAT` is not set.
    pub fn from_env() -> Result<Self, DispatchError> {
        let token = std::env::var("GITHUB_PAT")
            .map_err(|_| DispatchError::MissingToken { var: "GITHUB_PAT".into() })?;
        let timeout_ms = env_parse_u64("DISPATCH_TIMEOUT_MS", DEFAULT_DISPATCH_TIMEOUT_MS);
        Ok(Self { token, timeout_ms })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
