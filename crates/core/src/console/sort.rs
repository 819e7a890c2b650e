//! Product list sort keys.

use serde::{Deserialize, Serialize};

/// Sort code outside the known range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown sort key {0}, expected 1-4")]
pub struct SortKeyError(pub u8);

/// Ordering requested from the catalog service.
///
/// The numeric codes are part of the catalog wire contract (`?sort=<code>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SortKey {
    /// Catalog order by identifier.
    #[default]
    ById = 1,
    /// Alphabetical by name.
    ByName = 2,
    /// Cheapest first.
    ByPriceAsc = 3,
    /// Most expensive first.
    ByPriceDesc = 4,
}

impl SortKey {
    /// All sort keys in selector order.
    pub const ALL: [Self; 4] = [Self::ById, Self::ByName, Self::ByPriceAsc, Self::ByPriceDesc];

    /// Wire code sent to the catalog service.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ById => "Sort by ID",
            Self::ByName => "Sort by Name",
            Self::ByPriceAsc => "Sort by Price (Low-High)",
            Self::ByPriceDesc => "Sort by Price (High-Low)",
        }
    }
}

impl TryFrom<u8> for SortKey {
    type Error = SortKeyError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::ById),
            2 => Ok(Self::ByName),
            3 => Ok(Self::ByPriceAsc),
            4 => Ok(Self::ByPriceDesc),
            other => Err(SortKeyError(other)),
        }
    }
}

impl From<SortKey> for u8 {
    fn from(key: SortKey) -> Self {
        key.code()
    }
}
