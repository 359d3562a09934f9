//! Collection names.
//!
//! Each record kind lives in its own collection. The names appear in log
//! output and in storage errors.

/// Collection names for the in-memory store.
pub mod collection {
    /// User waitlist entries, in insertion order.
    pub const USER_WAITLIST: &str = "user_waitlist";

    /// Vendor waitlist entries, in insertion order.
    pub const VENDOR_WAITLIST: &str = "vendor_waitlist";
}

/// Returns all collection names.
#[must_use]
pub fn all_collections() -> Vec<&'static str> {
    vec![collection::USER_WAITLIST, collection::VENDOR_WAITLIST]
}
