//! In-memory waitlist store.
//!
//! Entries live in process memory only and are dropped on shutdown.
//! The store is a cheap `Clone` handle shared as axum state; the inner
//! lock is held only for the duration of each operation.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{WaitlistError, WaitlistResult};
use crate::models::WaitlistEntry;

/// Shared handle over the waitlist entries.
#[derive(Clone, Default)]
pub struct WaitlistStore {
    entries: Arc<RwLock<Vec<WaitlistEntry>>>,
}

impl WaitlistStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning its 1-based waitlist position.
    ///
    /// Duplicate emails are rejected case-insensitively.
    pub async fn insert(&self, entry: WaitlistEntry) -> WaitlistResult<usize> {
        let normalized = entry.email.normalized();
        let mut entries = self.entries.write().await;

        if entries.iter().any(|e| e.email.normalized() == normalized) {
            return Err(WaitlistError::DuplicateEmail(entry.email.as_str().to_string()));
        }

        entries.push(entry);
        Ok(entries.len())
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GuestEmail, GuestName};

    fn entry(name: &str, email: &str) -> WaitlistEntry {
        WaitlistEntry::new(
            GuestName::parse(name).unwrap(),
            GuestEmail::parse(email).unwrap(),
            None,
            String::new(),
            true,
        )
    }

    #[tokio::test]
    async fn test_insert_returns_one_based_position() {
        let store = WaitlistStore::new();
        assert_eq!(store.insert(entry("Ada", "ada@example.com")).await.unwrap(), 1);
        assert_eq!(store.insert(entry("Grace", "grace@example.com")).await.unwrap(), 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_case_insensitively() {
        let store = WaitlistStore::new();
        store.insert(entry("Ada", "ada@example.com")).await.unwrap();

        let err = store
            .insert(entry("Ada Again", "Ada@Example.COM"))
            .await
            .unwrap_err();
        assert!(matches!(err, WaitlistError::DuplicateEmail(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_the_same_entries() {
        let store = WaitlistStore::new();
        let handle = store.clone();

        store.insert(entry("Ada", "ada@example.com")).await.unwrap();
        assert_eq!(handle.len().await, 1);
    }
}
