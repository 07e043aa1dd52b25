//! API layer - HTTP entry points.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::App;

pub mod extractors;
pub mod forms;
pub mod http;
pub mod notice;
pub mod page;


/// Full router with state and request tracing applied.
pub fn router(app: Arc<App>) -> Router {
    http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}
