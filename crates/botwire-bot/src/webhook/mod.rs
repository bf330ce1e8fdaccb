//! Push-mode delivery: an HTTP endpoint the platform posts updates to.
//!
//! Each update is dispatched before the response is sent. A 5xx tells the
//! platform to redeliver; nothing is retried locally. Under the `skip`
//! unknown-message policy, undecodable updates and messages of no known
//! category are acknowledged so they do not hold up later deliveries.


use crate::dispatcher::Dispatcher;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use botwire_core::{config::WebhookConfig, error::BotError, traits::UpdateHandler};
use serde_json::{json, Value};
use std::future::Future;
use tracing::{debug, error, info, warn};

/// Updates larger than this are rejected before decoding.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Route paths must be absolute; the router panics otherwise.
fn validate_path(path: &str) -> Result<(), BotError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(BotError::Config(format!(
            "webhook.path must start with '/', got {path:?}"
        )))
    }
}

/// Build the receiver router with a single `POST <path>` route.
///
/// `path` must start with `/`; [`serve_with_shutdown`] checks this for
/// configured paths.
pub fn build_router<H>(path: &str, dispatcher: Dispatcher<H>) -> Router
where
    H: UpdateHandler + 'static,
{
    Router::new()
        .route(path, post(receive::<H>))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(dispatcher)
}

async fn receive<H>(
    State(dispatcher): State<Dispatcher<H>>,
    body: Bytes,
) -> (StatusCode, Json<Value>)
where
    H: UpdateHandler + 'static,
{
    let value: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!("webhook: body is not JSON: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"ok": false, "error": format!("invalid update: {e}")})),
            );
        }
    };

    let update_id = value.get("update_id").cloned().unwrap_or(Value::Null);
    debug!("webhook: update {update_id}");

    match dispatcher.dispatch_value(&value).await {
        Ok(()) => (StatusCode::OK, Json(json!({"ok": true}))),
        Err(BotError::Serialization(e)) => {
            warn!("webhook: undecodable update {update_id}: {e}");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"ok": false, "error": format!("invalid update: {e}")})),
            )
        }
        Err(e) => {
            error!("webhook: dispatch of update {update_id} failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"ok": false, "error": e.to_string()})),
            )
        }
    }
}

/// Serve the receiver until the process ends.
pub async fn serve<H>(config: &WebhookConfig, dispatcher: Dispatcher<H>) -> Result<(), BotError>
where
    H: UpdateHandler + 'static,
{
    serve_with_shutdown(config, dispatcher, std::future::pending()).await
}

/// Serve the receiver until `shutdown` resolves.
pub async fn serve_with_shutdown<H, F>(
    config: &WebhookConfig,
    dispatcher: Dispatcher<H>,
    shutdown: F,
) -> Result<(), BotError>
where
    H: UpdateHandler + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    validate_path(&config.path)?;
    let app = build_router(&config.path, dispatcher);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!("webhook receiver failed to bind to {addr}: {e}");
        BotError::Io(e)
    })?;

    info!("webhook receiver listening on {addr}{}", config.path);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
