use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Build the application router.
///
/// Every path goes through the SPA handler; there are no other routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::serve)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
