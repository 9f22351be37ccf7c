use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of an inscribed or tentative site, as assigned by the
/// UNESCO World Heritage Centre. Inscribed and tentative sites live in
/// separate ID spaces; the surrounding types keep them apart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SiteId(pub u32);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Global New7Wonders identifier: the owning group's offset (a multiple of
/// 100) plus the entry's local rank within that group. Ranks 1 through 7 are
/// the wonders proper; higher ranks are finalists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WonderId(pub u32);

impl WonderId {
    /// Combine a group offset (100, 200, ...) with a local rank.
    pub fn compose(group_offset: u32, rank: u32) -> Self {
        Self(group_offset + rank)
    }

    /// Local rank within the owning group.
    pub fn rank(self) -> u32 {
        self.0 % 100
    }

    pub fn is_wonder(self) -> bool {
        self.0 % 100 <= 7
    }

    pub fn is_finalist(self) -> bool {
        !self.is_wonder()
    }
}

impl fmt::Display for WonderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
