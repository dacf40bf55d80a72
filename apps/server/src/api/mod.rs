use std::sync::Arc;

use axum::http::{HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::main_lib::AppState;

mod badges;
mod completions;
mod goals;
mod health;
mod stats;

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let api = Router::new()
        .merge(health::router())
        .merge(goals::router())
        .merge(completions::router())
        .merge(badges::router())
        .merge(stats::router());

    Ok(Router::new()
        .nest("/api/v1", api)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config)?)
        .with_state(state))
}

fn build_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if config.cors_allow_origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }
    let origins = config
        .cors_allow_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{o}': {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(layer.allow_origin(origins))
}
