//! Per-key request bookkeeping for the home page.
//!
//! Flags always describe the *current* key. A result for an older key is
//! still recorded against that key (and counts as having data), but it
//! cannot flip the flags the view reads.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    Pending,
    Success,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryEntry {
    status: QueryStatus,
    fetching: bool,
}

#[derive(Debug, Clone)]
pub struct KeyedQuery<K> {
    current: Option<K>,
    entries: HashMap<K, QueryEntry>,
    has_data: bool,
}

impl<K: Eq + Hash + Copy> Default for KeyedQuery<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Copy> KeyedQuery<K> {
    pub fn new() -> Self {
        Self {
            current: None,
            entries: HashMap::new(),
            has_data: false,
        }
    }

    /// Make `key` current and mark it in flight.
    pub fn begin(&mut self, key: K) {
        self.current = Some(key);
        let entry = self.entries.entry(key).or_insert(QueryEntry {
            status: QueryStatus::Pending,
            fetching: false,
        });
        entry.fetching = true;
    }

    pub fn succeed(&mut self, key: K) {
        self.has_data = true;
        self.settle(key, QueryStatus::Success);
    }

    pub fn fail(&mut self, key: K, message: impl Into<String>) {
        self.settle(key, QueryStatus::Error(message.into()));
    }

    fn settle(&mut self, key: K, status: QueryStatus) {
        let entry = self.entries.entry(key).or_insert(QueryEntry {
            status: QueryStatus::Pending,
            fetching: false,
        });
        entry.status = status;
        entry.fetching = false;
    }

    pub fn current_key(&self) -> Option<K> {
        self.current
    }

    pub fn status(&self) -> Option<&QueryStatus> {
        self.current_entry().map(|entry| &entry.status)
    }

    /// Nothing has ever arrived and the current key is still pending.
    pub fn is_loading(&self) -> bool {
        !self.has_data && matches!(self.status(), Some(QueryStatus::Pending))
    }

    pub fn is_fetching(&self) -> bool {
        self.current_entry().is_some_and(|entry| entry.fetching)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status(), Some(QueryStatus::Error(_)))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self.status() {
            Some(QueryStatus::Error(message)) => Some(message),
            _ => None,
        }
    }

    fn current_entry(&self) -> Option<&QueryEntry> {
        self.current.and_then(|key| self.entries.get(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_query_has_no_flags() {
        let query = KeyedQuery::<u32>::new();
        assert!(!query.is_loading());
        assert!(!query.is_fetching());
        assert!(!query.is_error());
        assert_eq!(query.current_key(), None);
    }

    #[test]
    fn first_fetch_is_loading_until_success() {
        let mut query = KeyedQuery::new();
        query.begin(50);
        assert!(query.is_loading());
        assert!(query.is_fetching());

        query.succeed(50);
        assert!(!query.is_loading());
        assert!(!query.is_fetching());
        assert_eq!(query.status(), Some(&QueryStatus::Success));
    }

    #[test]
    fn later_keys_fetch_without_loading() {
        let mut query = KeyedQuery::new();
        query.begin(50);
        query.succeed(50);
        query.begin(51);
        assert!(!query.is_loading());
        assert!(query.is_fetching());
    }

    #[test]
    fn stale_failure_does_not_flag_current_key() {
        let mut query = KeyedQuery::new();
        query.begin(50);
        query.succeed(50);
        query.begin(51);
        query.begin(52);
        query.fail(51, "boom");
        assert!(!query.is_error());
        assert!(query.is_fetching());

        query.fail(52, "bang");
        assert!(query.is_error());
        assert_eq!(query.error_message(), Some("bang"));
    }

    #[test]
    fn stale_success_counts_as_data() {
        let mut query = KeyedQuery::new();
        query.begin(50);
        query.begin(51);
        query.succeed(50);
        assert!(!query.is_loading());
        assert!(query.is_fetching());
    }
}
