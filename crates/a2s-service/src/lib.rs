//! A2S Waitlist HTTP API Service.
//!
//! This crate provides the HTTP API behind the landing page's two waitlist
//! forms:
//!
//! - User waitlist intake and listing
//! - Vendor waitlist intake and listing
//! - Health check
//!
//! Every submission is validated against the shared schema in `a2s-core`
//! before it reaches the store. Entries live in memory for the lifetime of
//! the process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for the router even when they never await

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
