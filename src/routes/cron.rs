//! Cron trigger route — re-dispatches the scheduled review rebuild workflow.
//!
//! An external scheduler POSTs here with a bearer secret; the handler
//! forwards exactly one workflow-dispatch call to GitHub and maps every
//! failure to a distinct status code. Retry policy belongs to the scheduler,
//! not to this handler.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use crate::github::DispatchError;
use crate::state::AppState;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct DispatchFailed<'a> {
    error: &'a str,
    detail: String,
}

#[derive(Serialize)]
struct DispatchRejected<'a> {
    error: &'a str,
    #[serde(rename = "githubStatus")]
    github_status: u16,
    #[serde(rename = "githubBody")]
    github_body: String,
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /api/cron/dispatch` — authenticated trigger for the review rebuild.
///
/// Status codes: 200 dispatched, 401 bad or missing bearer secret, 500
/// missing server configuration, 502 GitHub rejected the dispatch, 504
/// transport failure or timeout.
pub async fn dispatch(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(secret) = state.cron_secret.as_deref() else {
        tracing::error!("cron dispatch refused: CRON_SECRET not configured");
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "cron not configured" })))
            .into_response();
    };

    // Exact-string comparison against the full header value. No trimming,
    // no case folding: anything but `Bearer <secret>` is rejected.
    let provided = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if provided != format!("Bearer {secret}") {
        tracing::warn!("cron dispatch refused: bad or missing bearer secret");
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "unauthorized" }))).into_response();
    }

    let Some(dispatcher) = &state.dispatcher else {
        tracing::error!("cron dispatch refused: GITHUB_PAT not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "github token not configured" })),
        )
            .into_response();
    };

    match dispatcher.dispatch_workflow(&state.target).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(DispatchError::Upstream { status, body }) => {
            tracing::error!(github_status = status, github_body = %body, "github rejected workflow dispatch");
            (
                StatusCode::BAD_GATEWAY,
                Json(DispatchRejected {
                    error: "github dispatch rejected",
                    github_status: status,
                    github_body: body,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "workflow dispatch failed");
            (
                StatusCode::GATEWAY_TIMEOUT,
                Json(DispatchFailed { error: "github dispatch failed", detail: e.to_string() }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
#[path = "cron_test.rs"]
mod tests;
