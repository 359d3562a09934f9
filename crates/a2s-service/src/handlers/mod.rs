//! API handlers.

pub mod health;
pub mod user_waitlist;
pub mod vendor_waitlist;

use serde::Serialize;

/// Body returned after a successful create.
#[derive(Debug, Serialize)]
pub struct EntryResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// The persisted entry, including identity and timestamp.
    pub entry: T,
}

impl<T> EntryResponse<T> {
    fn new(entry: T) -> Self {
        Self {
            success: true,
            entry,
        }
    }
}

/// Body returned by the list endpoints.
#[derive(Debug, Serialize)]
pub struct EntriesResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// Every stored entry, oldest first.
    pub entries: Vec<T>,
}

impl<T> EntriesResponse<T> {
    fn new(entries: Vec<T>) -> Self {
        Self {
            success: true,
            entries,
        }
    }
}
