//! Vendor waitlist handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use a2s_core::{validate_vendor_waitlist, VendorWaitlistEntry};

use super::{EntriesResponse, EntryResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Add a professional to the vendor waitlist.
pub async fn create_vendor_waitlist(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EntryResponse<VendorWaitlistEntry>>, ApiError> {
    let Json(body) = body?;

    let candidate = validate_vendor_waitlist(&body).map_err(|err| {
        tracing::debug!(issues = err.issues().len(), "Vendor waitlist submission rejected");
        err
    })?;

    let entry = state.store.create_vendor_waitlist(candidate)?;

    tracing::info!(
        id = %entry.id,
        role = %entry.role,
        has_portfolio = entry.portfolio_link.is_some(),
        "Vendor joined waitlist"
    );

    Ok(Json(EntryResponse::new(entry)))
}

/// List the vendor waitlist in submission order.
pub async fn list_vendor_waitlist(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EntriesResponse<VendorWaitlistEntry>>, ApiError> {
    let entries = state.store.list_vendor_waitlist()?;
    Ok(Json(EntriesResponse::new(entries)))
}
