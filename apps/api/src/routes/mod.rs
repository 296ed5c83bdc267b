pub mod health;

use axum::{routing::get, Router};

use crate::ideas::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_random_html))
        .route("/index.json", get(handlers::handle_random_json))
        .route("/index.txt", get(handlers::handle_random_text))
        .route("/humans.txt", get(handlers::handle_humans))
        // `/{identifier}` and `/{identifier}.json` share this segment; the
        // handler splits on the suffix. Static routes above take priority.
        .route("/:slug", get(handlers::handle_slug))
        .route("/:hash/index.txt", get(handlers::handle_text_by_hash))
        .with_state(state)
}
