//! Aggregation state and coverage totals.
//!
//! Visited IDs accumulate into sets, not counters: a site encountered twice
//! during the build pass (the orphan site can arrive through its natural
//! join and the manual attribution) still counts once, and rebuilding the
//! report cannot drift the totals.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use whl_model::{SiteId, WonderId};

/// Share of a total as a percentage, or `Undefined` when the total is zero.
///
/// Zero denominators are reported as undefined, never coerced to 0 or 100;
/// earlier revisions of the upstream tool special-cased this inconsistently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Percentage {
    Undefined,
    Of(f64),
}

impl Percentage {
    pub fn of(visited: usize, total: usize) -> Self {
        if total == 0 {
            Percentage::Undefined
        } else {
            Percentage::Of(visited as f64 * 100.0 / total as f64)
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Undefined => f.write_str("n/a"),
            Percentage::Of(value) => write!(f, "{value:.1}%"),
        }
    }
}

/// Distinct visited IDs, threaded through one report build pass.
#[derive(Debug, Default)]
pub struct VisitedAccumulator {
    whs: BTreeSet<SiteId>,
    twhs: BTreeSet<SiteId>,
    wonders: BTreeSet<WonderId>,
}

impl VisitedAccumulator {
    pub fn record_whs(&mut self, id: SiteId) {
        self.whs.insert(id);
    }

    pub fn record_twhs(&mut self, id: SiteId) {
        self.twhs.insert(id);
    }

    pub fn record_wonder(&mut self, id: WonderId) {
        self.wonders.insert(id);
    }

    pub fn whs_count(&self) -> usize {
        self.whs.len()
    }

    pub fn twhs_count(&self) -> usize {
        self.twhs.len()
    }

    /// Visited wonders split into (wonders, finalists) by composed ID.
    pub fn wonder_split(&self) -> (usize, usize) {
        let wonders = self.wonders.iter().filter(|id| id.is_wonder()).count();
        (wonders, self.wonders.len() - wonders)
    }
}

/// Site coverage totals over the full datasets, not per-country sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SiteTally {
    pub inscribed_total: usize,
    pub tentative_total: usize,
    pub inscribed_visited: usize,
    pub tentative_visited: usize,
}

impl SiteTally {
    pub fn total(&self) -> usize {
        self.inscribed_total + self.tentative_total
    }

    pub fn visited(&self) -> usize {
        self.inscribed_visited + self.tentative_visited
    }

    pub fn inscribed_share(&self) -> Percentage {
        Percentage::of(self.inscribed_visited, self.inscribed_total)
    }

    pub fn tentative_share(&self) -> Percentage {
        Percentage::of(self.tentative_visited, self.tentative_total)
    }

    pub fn combined_share(&self) -> Percentage {
        Percentage::of(self.visited(), self.total())
    }
}

/// Wonder coverage totals across all groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WonderTally {
    pub wonders_total: usize,
    pub finalists_total: usize,
    pub wonders_visited: usize,
    pub finalists_visited: usize,
}

impl WonderTally {
    pub fn total(&self) -> usize {
        self.wonders_total + self.finalists_total
    }

    pub fn visited(&self) -> usize {
        self.wonders_visited + self.finalists_visited
    }

    pub fn wonders_share(&self) -> Percentage {
        Percentage::of(self.wonders_visited, self.wonders_total)
    }

    pub fn finalists_share(&self) -> Percentage {
        Percentage::of(self.finalists_visited, self.finalists_total)
    }

    pub fn combined_share(&self) -> Percentage {
        Percentage::of(self.visited(), self.total())
    }
}
