// Web server: Axum-based JSON API around the profanity filter.
//
// POST /check is the product; /health and /config are operational endpoints.
// The filter is built before the listener binds and shared read-only by all
// request tasks. Every failure on the check path, including a panic, is
// answered with the same generic 400 so no internal detail leaks out.

use std::any::Any;
use std::sync::Arc;

use anyhow::Result;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::detect::ProfanityFilter;

pub mod error;
pub mod handlers;

/// The one error message clients ever see.
pub const INVALID_REQUEST: &str = "Invalid request";

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub filter: Arc<ProfanityFilter>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, filter: ProfanityFilter) -> Self {
        Self {
            filter: Arc::new(filter),
            config: Arc::new(config),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    filter: ProfanityFilter,
    port: u16,
    bind: &str,
) -> Result<()> {
    let app = build_router(AppState::new(config, filter));

    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("badwords listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    build_router_with(state, handlers::check::check_text)
}

/// The full route and layer stack, with `check` answering POST /check.
pub fn build_router_with<H, T>(state: AppState, check: H) -> Router
where
    H: Handler<T, AppState>,
    T: 'static,
{
    Router::new()
        .route(
            "/check",
            post(check).layer(CatchPanicLayer::custom(panic_response)),
        )
        .route("/health", get(health))
        .route("/config", get(handlers::config::get_config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check. Always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// Turn a panic inside the check pipeline into the generic client error.
/// The panic message goes to the log only.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    };
    error!(panic = %detail, "Check pipeline panicked");
    api_error(StatusCode::BAD_REQUEST, INVALID_REQUEST)
}
