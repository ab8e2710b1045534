mod github;
mod routes;
mod state;

use std::sync::Arc;

use github::{DispatchTarget, GitHubDispatcher, WorkflowDispatch};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Cron credentials are optional at startup (non-fatal: the dispatch
    // endpoint answers 500 until they are configured).
    let cron_secret = std::env::var("CRON_SECRET").ok();
    if cron_secret.is_none() {
        tracing::warn!("CRON_SECRET not set — cron dispatch endpoint disabled");
    }

    let dispatcher: Option<Arc<dyn WorkflowDispatch>> = match GitHubDispatcher::from_env() {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!(error = %e, "GitHub dispatcher not configured — scheduled rebuild trigger disabled");
            None
        }
    };

    let state = state::AppState::new(cron_secret, dispatcher, DispatchTarget::review_rebuild());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "kotoba listening");
    axum::serve(listener, app).await.expect("server failed");
}
