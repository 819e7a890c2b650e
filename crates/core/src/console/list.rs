//! Product list state and fetch sequencing.
//!
//! A mounted product list issues a fetch on mount, on every sort change and
//! after every delete. Responses can arrive out of order, so each fetch takes
//! a [`RequestTicket`] from the list's [`FetchSequencer`]; only the response
//! for the most recently issued ticket may replace what is on screen.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Product;

/// Identity of one mounted product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListViewId(Uuid);

impl ListViewId {
    /// Mint an id for a freshly mounted list.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ListViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ListViewId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Sequence number handed out for one list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket counter for one list instance.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    latest: AtomicU64,
}

impl FetchSequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issue the ticket for a new fetch, superseding all earlier ones.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is still the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Turn a fetch outcome into list state, or `None` if a newer fetch was
    /// issued while this one was in flight.
    pub fn resolve<E: Display>(
        &self,
        ticket: RequestTicket,
        outcome: Result<Vec<Product>, E>,
    ) -> Option<ListState> {
        self.is_current(ticket)
            .then(|| ListState::from_fetch(outcome))
    }
}

/// What the product list area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Last fetch failed; the message is shown verbatim.
    Failed(String),
    /// Fetch succeeded with zero records.
    Empty,
    /// Fetch succeeded with at least one record.
    Populated(Vec<Product>),
}

impl ListState {
    /// Map a completed fetch onto the four display states.
    pub fn from_fetch<E: Display>(outcome: Result<Vec<Product>, E>) -> Self {
        match outcome {
            Ok(records) if records.is_empty() => Self::Empty,
            Ok(records) => Self::Populated(records),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Records to render as cards; empty unless populated.
    #[must_use]
    pub fn records(&self) -> &[Product] {
        match self {
            Self::Populated(records) => records,
            _ => &[],
        }
    }
}
