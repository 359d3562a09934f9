//! A2S Waitlist Client.
//!
//! This crate is the landing page's side of the waitlist pathway:
//!
//! - [`A2sClient`], an HTTP client for the waitlist endpoints
//! - [`UserWaitlistForm`] and [`VendorWaitlistForm`], headless dialog
//!   controllers that validate against the shared schema before submitting
//!
//! # Example
//!
//! ```no_run
//! use a2s_client::{A2sClient, VendorWaitlistForm};
//! use a2s_core::VendorRole;
//!
//! # async fn example() -> Result<(), a2s_client::ClientError> {
//! let client = A2sClient::new("http://localhost:5000")?;
//!
//! // The vendor directory opens the dialog with a role already chosen
//! let mut form = VendorWaitlistForm::new();
//! form.open_with_role(Some(VendorRole::Interior));
//!
//! let values = form.values_mut();
//! values.name = "Ravi".into();
//! values.contact = "ravi@example.com".into();
//! values.experience = "Twelve years designing compact city apartments.".into();
//! values.location = "Mumbai".into();
//!
//! if let Some(notification) = form.submit(&client).await {
//!     println!("{}: {}", notification.title, notification.description);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
pub mod forms;
mod types;

pub use client::{A2sClient, ClientOptions};
pub use error::ClientError;
pub use forms::{Notification, SubmitBlocked, UserWaitlistForm, Variant, VendorWaitlistForm, WaitlistForm};
pub use types::*;
