//! Storage layer for the A2S waitlists.
//!
//! This crate provides process-lifetime storage for user and vendor waitlist
//! entries. The store, not the caller, assigns each entry its identity token
//! and creation timestamp.
//!
//! # Architecture
//!
//! The storage keeps one collection per record kind:
//!
//! - `user_waitlist`: user waitlist entries, in insertion order
//! - `vendor_waitlist`: vendor waitlist entries, in insertion order
//!
//! Nothing is written to disk; all entries are lost when the process exits.
//!
//! # Example
//!
//! ```
//! use a2s_core::{NewUserWaitlistEntry, PreferredPlan};
//! use a2s_store::{MemoryStore, Store};
//!
//! let store = MemoryStore::new();
//!
//! let entry = store
//!     .create_user_waitlist(NewUserWaitlistEntry {
//!         name: "Asha".into(),
//!         contact: "asha@example.com".into(),
//!         preferred_plan: PreferredPlan::Premium,
//!         location: "Pune".into(),
//!         reason: "Looking for a smarter way to manage my apartment.".into(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(store.list_user_waitlist().unwrap(), vec![entry]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;

use a2s_core::{NewUserWaitlistEntry, NewVendorWaitlistEntry, UserWaitlistEntry, VendorWaitlistEntry};

/// The storage trait defining all waitlist operations.
///
/// This trait abstracts the storage layer so the HTTP service can be handed
/// any implementation (in-memory in production, fault-injecting in tests).
///
/// Entries are never updated or deleted; each `create_*` call is a single
/// step that is either fully visible to later `list_*` calls or did not
/// happen.
pub trait Store: Send + Sync {
    // =========================================================================
    // User Waitlist
    // =========================================================================

    /// Persist a validated user candidate.
    ///
    /// Assigns a fresh identity and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself is broken.
    fn create_user_waitlist(&self, candidate: NewUserWaitlistEntry) -> Result<UserWaitlistEntry>;

    /// List user entries in insertion order (newest last).
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself is broken.
    fn list_user_waitlist(&self) -> Result<Vec<UserWaitlistEntry>>;

    // =========================================================================
    // Vendor Waitlist
    // =========================================================================

    /// Persist a validated vendor candidate.
    ///
    /// Assigns a fresh identity and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself is broken.
    fn create_vendor_waitlist(
        &self,
        candidate: NewVendorWaitlistEntry,
    ) -> Result<VendorWaitlistEntry>;

    /// List vendor entries in insertion order (newest last).
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself is broken.
    fn list_vendor_waitlist(&self) -> Result<Vec<VendorWaitlistEntry>>;
}
