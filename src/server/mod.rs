//! HTTP surface.
//!
//! Thin CRUD boundary around the matching engine: profile create/read/update
//! plus the matches endpoint. Transport framing is all that lives here; the
//! engine's contract ("always returns a ranked list") does the heavy
//! lifting.

pub mod error;
pub mod handlers;
pub mod state;


pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::analysis::Analyst;
use crate::embedding::Embedder;

/// Builds the application router.
pub fn create_router<E, A>(state: Arc<AppState<E, A>>) -> Router
where
    E: Embedder + Clone + 'static,
    A: Analyst + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/profiles", post(handlers::create_profile))
        .route(
            "/v1/profiles/{id}",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .route("/v1/profiles/{id}/matches", get(handlers::get_matches))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
