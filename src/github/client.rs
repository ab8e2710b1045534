//! GitHub Actions workflow-dispatch client.
//!
//! Thin HTTP wrapper for
//! `POST /repos/{owner}/{repo}/actions/workflows/{file}/dispatches`.
//! URL and body assembly are pure functions for testability.

use std::time::Duration;

use super::config::{DispatchConfig, DispatchTarget};
use super::types::{DispatchError, WorkflowDispatch};

const API_BASE_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const ACCEPT_HEADER: &str = "application/vnd.github+json";
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = "kotoba-server";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GitHubDispatcher {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl GitHubDispatcher {
    /// Build a dispatcher from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: DispatchConfig) -> Result<Self, DispatchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| DispatchError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, token: config.token, base_url: API_BASE_URL.to_string() })
    }

    /// Build a dispatcher from environment variables. See
    /// [`DispatchConfig::from_env`] for the variables consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if `GITHUB_PAT` is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, DispatchError> {
        Self::new(DispatchConfig::from_env()?)
    }
}

#[async_trait::async_trait]
impl WorkflowDispatch for GitHubDispatcher {
    async fn dispatch_workflow(&self, target: &DispatchTarget) -> Result<(), DispatchError> {
        let response = self
            .http
            .post(dispatch_url(&self.base_url, target))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", ACCEPT_HEADER)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .json(&dispatch_body(target))
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // GitHub answers 204 on success; anything else carries a
            // diagnostic body. A failed body read degrades to empty.
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Upstream { status: status.as_u16(), body });
        }
        Ok(())
    }
}

// =============================================================================
// REQUEST ASSEMBLY
// =============================================================================

fn dispatch_url(base_url: &str, target: &DispatchTarget) -> String {
    format!(
        "{base_url}/repos/{}/{}/actions/workflows/{}/dispatches",
        target.owner, target.repo, target.workflow_file
    )
}

fn dispatch_body(target: &DispatchTarget) -> serde_json::Value {
    serde_json::json!({ "ref": target.git_ref })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
