use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::country::Alpha2;
use crate::ids::SiteId;

/// Raw country-code field of a site row.
///
/// Free text straight from the source export: usually a single alpha-2 code,
/// sometimes several comma-separated ("il,jo"), lowercase in some vintages,
/// and empty for exactly one documented transboundary site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCodes(String);

impl CountryCodes {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// ASCII-case-insensitive substring containment of `code`.
    ///
    /// Substring rather than token-exact matching is the join contract of
    /// the upstream export, where one field can carry several codes. A code
    /// that happened to appear inside another entry of the field would also
    /// match; comma-separated alpha-2 codes do not collide that way, and
    /// the limitation is pinned by tests rather than silently assumed away.
    pub fn contains(&self, code: &Alpha2) -> bool {
        self.0
            .to_ascii_lowercase()
            .contains(&code.as_str().to_ascii_lowercase())
    }
}

/// An inscribed World Heritage Site (WHS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InscribedSite {
    pub id: SiteId,
    pub name: String,
    pub countries: CountryCodes,
}

/// A Tentative-List site (TWHS): a candidate submitted by a state party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TentativeSite {
    pub id: SiteId,
    pub name: String,
    pub countries: CountryCodes,
    pub submitted: Option<NaiveDate>,
}
