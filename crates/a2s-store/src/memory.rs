//! In-memory storage implementation.
//!
//! This module provides the `MemoryStore` implementation of the `Store` trait.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use a2s_core::{
    NewUserWaitlistEntry, NewVendorWaitlistEntry, UserWaitlistEntry, UserWaitlistId,
    VendorWaitlistEntry, VendorWaitlistId,
};

use crate::error::{Result, StoreError};
use crate::schema::{all_collections, collection};
use crate::Store;

/// One insertion-ordered collection.
struct Collection<T> {
    name: &'static str,
    state: RwLock<CollectionState<T>>,
}

struct CollectionState<T> {
    entries: Vec<T>,
    /// Timestamp issued to the most recent insert.
    last_created_at: Option<DateTime<Utc>>,
}

impl<T: Clone> Collection<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RwLock::new(CollectionState {
                entries: Vec::new(),
                last_created_at: None,
            }),
        }
    }

    /// Append the entry produced by `build` and return a copy of it.
    ///
    /// `build` receives the creation timestamp, which never precedes the one
    /// handed to the previous insert even if the wall clock steps back.
    fn insert_with(&self, clock: &Clock, build: impl FnOnce(DateTime<Utc>) -> T) -> Result<T> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned {
            collection: self.name,
        })?;

        let now = clock();
        let created_at = state.last_created_at.map_or(now, |last| last.max(now));
        let entry = build(created_at);

        state.last_created_at = Some(created_at);
        state.entries.push(entry.clone());

        Ok(entry)
    }

    fn snapshot(&self) -> Result<Vec<T>> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned {
            collection: self.name,
        })?;
        Ok(state.entries.clone())
    }
}

/// Source of creation timestamps.
type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Volatile storage backed by in-process vectors.
///
/// Construct one at startup and share it behind an `Arc`; dropping it drops
/// every entry.
pub struct MemoryStore {
    user_waitlist: Collection<UserWaitlistEntry>,
    vendor_waitlist: Collection<VendorWaitlistEntry>,
    clock: Clock,
}

impl MemoryStore {
    /// Create an empty store stamping entries with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Create an empty store that reads creation times from `clock`.
    ///
    /// Stored timestamps stay non-decreasing per collection whatever `clock`
    /// returns.
    #[must_use]
    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        tracing::debug!(collections = ?all_collections(), "In-memory store initialized");

        Self {
            user_waitlist: Collection::new(collection::USER_WAITLIST),
            vendor_waitlist: Collection::new(collection::VENDOR_WAITLIST),
            clock: Box::new(clock),
        }
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    // =========================================================================
    // User Waitlist
    // =========================================================================

    fn create_user_waitlist(&self, candidate: NewUserWaitlistEntry) -> Result<UserWaitlistEntry> {
        let id = UserWaitlistId::generate();
        let entry = self
            .user_waitlist
            .insert_with(&self.clock, |created_at| UserWaitlistEntry::new(id, candidate, created_at))?;

        tracing::debug!(
            collection = collection::USER_WAITLIST,
            id = %entry.id,
            "Entry stored"
        );

        Ok(entry)
    }

    fn list_user_waitlist(&self) -> Result<Vec<UserWaitlistEntry>> {
        self.user_waitlist.snapshot()
    }

    // =========================================================================
    // Vendor Waitlist
    // =========================================================================

    fn create_vendor_waitlist(
        &self,
        candidate: NewVendorWaitlistEntry,
    ) -> Result<VendorWaitlistEntry> {
        let id = VendorWaitlistId::generate();
        let entry = self
            .vendor_waitlist
            .insert_with(&self.clock, |created_at| VendorWaitlistEntry::new(id, candidate, created_at))?;

        tracing::debug!(
            collection = collection::VENDOR_WAITLIST,
            id = %entry.id,
            "Entry stored"
        );

        Ok(entry)
    }

    fn list_vendor_waitlist(&self) -> Result<Vec<VendorWaitlistEntry>> {
        self.vendor_waitlist.snapshot()
    }
}
