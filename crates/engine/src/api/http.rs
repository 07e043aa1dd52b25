//! HTTP routes.

use std::sync::Arc;

use agenda_domain::{ContactInput, Entry};
use axum::{
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};

use super::forms::{DeleteEntryForm, EditEntryForm};
use super::notice::{self, Notice};
use super::page;
use crate::app::App;
use crate::infrastructure::entry_repository::SqliteEntryRepo;
use crate::infrastructure::ports::RepoError;
use crate::infrastructure::storage::RequestDb;
use crate::use_cases::{EntryError, EntryOps};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(show_entries))
        .route("/add", post(add_entry))
        .route("/edit", post(edit_entry))
        .route("/delete", post(delete_entry))
        .route("/api/entries", get(list_entries))
        .route("/api/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// List
// =============================================================================

async fn show_entries(headers: HeaderMap, mut db: RequestDb) -> Result<Response, ApiError> {
    let mut repo = SqliteEntryRepo::new(&mut db);
    let entries = EntryOps::new(&mut repo).list().await?;
    db.close().await?;

    let notice = Notice::from_headers(&headers);
    let html = Html(page::render_entries(&entries, notice));

    // Shown once: clear the cookie on the page that displays it.
    match notice {
        Some(_) => Ok(([(SET_COOKIE, notice::clear_cookie())], html).into_response()),
        None => Ok(html.into_response()),
    }
}

async fn list_entries(mut db: RequestDb) -> Result<Json<Vec<Entry>>, ApiError> {
    let mut repo = SqliteEntryRepo::new(&mut db);
    let entries = EntryOps::new(&mut repo).list().await?;
    db.close().await?;
    Ok(Json(entries))
}

// =============================================================================
// Mutations
// =============================================================================

async fn add_entry(
    mut db: RequestDb,
    Form(input): Form<ContactInput>,
) -> Result<Response, ApiError> {
    let mut repo = SqliteEntryRepo::new(&mut db);
    let result = EntryOps::new(&mut repo).add(input).await;
    let notice = settle(result, Notice::Added, "add")?;
    db.close().await?;
    Ok(back_to_list(notice))
}

async fn edit_entry(
    mut db: RequestDb,
    Form(form): Form<EditEntryForm>,
) -> Result<Response, ApiError> {
    let (id, input) = form.into_parts();
    let mut repo = SqliteEntryRepo::new(&mut db);
    let result = EntryOps::new(&mut repo).edit(id, input).await;
    let notice = settle(result, Notice::Updated, "edit")?;
    db.close().await?;
    Ok(back_to_list(notice))
}

async fn delete_entry(
    mut db: RequestDb,
    Form(form): Form<DeleteEntryForm>,
) -> Result<Response, ApiError> {
    let mut repo = SqliteEntryRepo::new(&mut db);
    let result = EntryOps::new(&mut repo).delete(form.entry_id()).await;
    let notice = settle(result, Notice::Deleted, "delete")?;
    db.close().await?;
    Ok(back_to_list(notice))
}

/// Turn a mutation result into the notice for the next page.
///
/// Rejected input becomes the generic request error; storage failures fail the
/// request.
fn settle<T>(
    result: Result<T, EntryError>,
    success: Notice,
    action: &'static str,
) -> Result<Notice, ApiError> {
    match result {
        Ok(_) => Ok(success),
        Err(EntryError::Invalid(e)) => {
            tracing::info!(action, error = %e, "Rejected entry form");
            Ok(Notice::RequestError)
        }
        Err(EntryError::Repo(e)) => Err(e.into()),
    }
}

fn back_to_list(notice: Notice) -> Response {
    ([(SET_COOKIE, notice.set_cookie())], Redirect::to("/")).into_response()
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<EntryError> for ApiError {
    fn from(e: EntryError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
