//! In-memory stand-in for the rental management backend
//!
//! Speaks the same REST contract as the production service so the client can
//! be exercised end to end without it.

mod auth;
mod routes;
mod state;

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::{StubConfig, StubData, StubError, StubState};

/// Build the full application router
pub fn router(state: StubState) -> Router {
    let protected = Router::new()
        .merge(routes::tenant::router())
        .merge(routes::room::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .merge(routes::health::router())
        .merge(routes::auth::router())
        .merge(protected)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
