//! Core types and validation for the A2S waitlists.
//!
//! This crate provides the foundational types shared by the service and the
//! form client:
//!
//! - **Identifiers**: `UserWaitlistId`, `VendorWaitlistId`
//! - **Records**: `UserWaitlistEntry`, `VendorWaitlistEntry` and their
//!   pre-persistence candidates
//! - **Enumerations**: `PreferredPlan`, `VendorRole`
//! - **Schema**: the field tables and the `validate_*` functions
//!
//! # Dual validation
//!
//! The same [`schema`] runs in the form client (for immediate feedback) and in
//! the HTTP handlers (as the authoritative gate). A candidate that reaches the
//! store has always passed the server-side check.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod schema;
pub mod waitlist;

pub use error::{FieldIssue, ParseError, ValidationError};
pub use ids::{IdError, UserWaitlistId, VendorWaitlistId};
pub use schema::{validate_user_waitlist, validate_vendor_waitlist};
pub use waitlist::{
    NewUserWaitlistEntry, NewVendorWaitlistEntry, PreferredPlan, UserWaitlistEntry,
    VendorRole, VendorWaitlistEntry,
};
