//! User waitlist handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use a2s_core::{validate_user_waitlist, UserWaitlistEntry};

use super::{EntriesResponse, EntryResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Add a visitor to the user waitlist.
///
/// The body is checked against the schema here regardless of what the form
/// client already checked.
pub async fn create_user_waitlist(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EntryResponse<UserWaitlistEntry>>, ApiError> {
    let Json(body) = body?;

    let candidate = validate_user_waitlist(&body).map_err(|err| {
        tracing::debug!(issues = err.issues().len(), "User waitlist submission rejected");
        err
    })?;

    let entry = state.store.create_user_waitlist(candidate)?;

    tracing::info!(
        id = %entry.id,
        plan = %entry.preferred_plan,
        "User joined waitlist"
    );

    Ok(Json(EntryResponse::new(entry)))
}

/// List the user waitlist in submission order.
pub async fn list_user_waitlist(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EntriesResponse<UserWaitlistEntry>>, ApiError> {
    let entries = state.store.list_user_waitlist()?;
    Ok(Json(EntriesResponse::new(entries)))
}
