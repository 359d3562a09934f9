//! Request and response types for the waitlist client.

use serde::{Deserialize, Serialize};

use a2s_core::FieldIssue;

/// Raw user waitlist form values, exactly as typed.
///
/// Every field is text so the form can hold partially filled or invalid
/// input; the schema decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWaitlistInput {
    /// Full name.
    pub name: String,
    /// Email address.
    pub contact: String,
    /// Plan value (`basic`, `premium`, `enterprise`).
    pub preferred_plan: String,
    /// City or state.
    pub location: String,
    /// Why the visitor wants the platform.
    pub reason: String,
}

/// Raw vendor waitlist form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorWaitlistInput {
    /// Full name.
    pub name: String,
    /// Email address.
    pub contact: String,
    /// Role value (`vastu`, `interior`, `business`, `carpenter`).
    pub role: String,
    /// Portfolio URL; empty when not provided.
    pub portfolio_link: String,
    /// Background and experience.
    pub experience: String,
    /// City or state.
    pub location: String,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// Successful create body.
#[derive(Debug, Deserialize)]
pub(crate) struct EntryResponse<T> {
    pub entry: T,
}

/// Successful list body.
#[derive(Debug, Deserialize)]
pub(crate) struct EntriesResponse<T> {
    pub entries: Vec<T>,
}

/// Error body (`success: false`).
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FieldIssue>,
}
