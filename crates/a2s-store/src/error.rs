//! Error types for waitlist storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the collection lock.
    #[error("collection lock poisoned: {collection}")]
    Poisoned {
        /// The affected collection.
        collection: &'static str,
    },

    /// Backend-specific failure.
    ///
    /// `MemoryStore` never returns this; it is for `Store` implementations
    /// outside this crate that sit on fallible I/O.
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let poisoned = StoreError::Poisoned {
            collection: crate::schema::collection::USER_WAITLIST,
        };
        assert_eq!(poisoned.to_string(), "collection lock poisoned: user_waitlist");

        let backend = StoreError::Backend("connection refused".into());
        assert_eq!(backend.to_string(), "storage backend error: connection refused");
    }
}
