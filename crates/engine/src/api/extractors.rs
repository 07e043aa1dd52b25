//! Request extractors.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::app::App;
use crate::infrastructure::storage::RequestDb;

/// Every request gets its own storage handle; it connects lazily.
impl FromRequestParts<Arc<App>> for RequestDb {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        app: &Arc<App>,
    ) -> Result<Self, Self::Rejection> {
        Ok(app.storage.session())
    }
}
