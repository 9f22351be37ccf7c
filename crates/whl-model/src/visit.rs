use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ModelError;
use crate::ids::{SiteId, WonderId};

/// Which kind of entity a visit record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitKind {
    Wonder,
    Inscribed,
    Tentative,
}

impl fmt::Display for VisitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VisitKind::Wonder => "wonder",
            VisitKind::Inscribed => "WHS",
            VisitKind::Tentative => "TWHS",
        };
        f.write_str(label)
    }
}

/// The single entity a visit marks as visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitTarget {
    Wonder(WonderId),
    Inscribed(SiteId),
    Tentative(SiteId),
}

impl VisitTarget {
    pub fn kind(&self) -> VisitKind {
        match self {
            VisitTarget::Wonder(_) => VisitKind::Wonder,
            VisitTarget::Inscribed(_) => VisitKind::Inscribed,
            VisitTarget::Tentative(_) => VisitKind::Tentative,
        }
    }
}

/// Supplementary reference links attached to a visit. All optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitLinks {
    pub visit: Option<Url>,
    pub stay: Option<Url>,
    pub eat: Option<Url>,
}

impl VisitLinks {
    pub fn is_empty(&self) -> bool {
        self.visit.is_none() && self.stay.is_none() && self.eat.is_none()
    }

    /// Present links with their display labels, in render order.
    pub fn labeled(&self) -> Vec<(&'static str, &Url)> {
        [
            ("Visit", self.visit.as_ref()),
            ("Stay", self.stay.as_ref()),
            ("Eat", self.eat.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| (label, url)))
        .collect()
    }
}

/// A personal visit record: marks one wonder, WHS, or TWHS as visited and
/// optionally carries reference links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub target: VisitTarget,
    pub links: VisitLinks,
}

impl Visit {
    /// Build a visit from the three optional ID fields of a source record.
    ///
    /// Exactly one of the targets must be set; the source format leaves this
    /// implicit, so it is enforced here at construction.
    pub fn from_fields(
        wonder: Option<WonderId>,
        whs: Option<SiteId>,
        twhs: Option<SiteId>,
        links: VisitLinks,
    ) -> Result<Self, ModelError> {
        let target = match (wonder, whs, twhs) {
            (Some(id), None, None) => VisitTarget::Wonder(id),
            (None, Some(id), None) => VisitTarget::Inscribed(id),
            (None, None, Some(id)) => VisitTarget::Tentative(id),
            (None, None, None) => return Err(ModelError::VisitWithoutTarget),
            _ => return Err(ModelError::AmbiguousVisitTarget),
        };
        Ok(Self { target, links })
    }
}
