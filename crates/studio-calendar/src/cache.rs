//! Memoized event aggregation.
//!
//! Aggregation is a pure function of the item collection, so the result is
//! kept until the collection's fingerprint changes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use studio_models::Item;
use tracing::debug;

use crate::events::{aggregate, CalendarEvent};

/// Returns a fingerprint of the item collection, sensitive to order.
pub fn fingerprint(items: &[Item]) -> u64 {
    let mut hasher = DefaultHasher::new();
    items.hash(&mut hasher);
    hasher.finish()
}

/// Cache of the last aggregation result, keyed by item fingerprint.
#[derive(Debug, Default)]
pub struct AggregationCache {
    key: Option<u64>,
    events: Vec<CalendarEvent>,
    hits: u64,
    misses: u64,
}

impl AggregationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events for `items`, recomputing only when they changed.
    pub fn events(&mut self, items: &[Item]) -> &[CalendarEvent] {
        let key = fingerprint(items);

        if self.key == Some(key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.events = aggregate(items);
            self.key = Some(key);
            debug!(
                items = items.len(),
                events = self.events.len(),
                "recomputed calendar events"
            );
        }

        &self.events
    }

    /// Drops the cached result.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.events.clear();
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that recomputed.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
