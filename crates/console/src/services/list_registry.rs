//! Fetch sequencers for mounted product lists.
//!
//! Every product list rendered into a page gets a [`ListViewId`]. Its list
//! fetches (sort changes, re-fetch after delete) are sequenced here so a
//! slow, superseded response is dropped instead of overwriting newer data.
//! Entries expire once the list has been idle for a while, which is as close
//! to "unmounted" as a server can observe.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use pkart_core::{FetchSequencer, ListViewId};

/// How long an untouched list keeps its sequencer.
const LIST_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Upper bound on tracked lists.
const MAX_TRACKED_LISTS: u64 = 10_000;

/// Registry of per-list fetch sequencers.
#[derive(Clone)]
pub struct ListRegistry {
    lists: Cache<ListViewId, Arc<FetchSequencer>>,
}

impl ListRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lists: Cache::builder()
                .max_capacity(MAX_TRACKED_LISTS)
                .time_to_idle(LIST_IDLE_TIMEOUT)
                .build(),
        }
    }

    /// The sequencer for `view`, created on first use.
    #[must_use]
    pub fn sequencer(&self, view: ListViewId) -> Arc<FetchSequencer> {
        self.lists.get_with(view, || Arc::new(FetchSequencer::new()))
    }
}

impl Default for ListRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_view_shares_sequencer() {
        let registry = ListRegistry::new();
        let view = ListViewId::new();

        let first = registry.sequencer(view).issue();
        let second = registry.sequencer(view).issue();

        assert!(second > first);
        assert!(!registry.sequencer(view).is_current(first));
    }

    #[test]
    fn test_views_are_independent() {
        let registry = ListRegistry::new();
        let a = registry.sequencer(ListViewId::new());
        let b = registry.sequencer(ListViewId::new());

        let ticket = a.issue();
        b.issue();

        assert!(a.is_current(ticket));
    }
}
