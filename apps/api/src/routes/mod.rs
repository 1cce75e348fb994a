pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

/// Headroom over `max_input_bytes` for JSON framing and escapes.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_input_bytes
        .saturating_mul(2)
        .saturating_add(BODY_LIMIT_SLACK);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/parse", post(handlers::handle_parse))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
