use serde::{Deserialize, Serialize};

use crate::country::{Country, CountryFile, Member};
use crate::site::{InscribedSite, TentativeSite};
use crate::visit::Visit;
use crate::wonder::WonderGroup;

/// Everything one snapshot of the source data parses to.
///
/// Loaded once at startup, reconciled, reported on, and discarded; there is
/// no update path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntities {
    pub countries: Vec<Country>,
    pub members: Vec<Member>,
    pub inscribed: Vec<InscribedSite>,
    pub tentative: Vec<TentativeSite>,
    pub visits: Vec<Visit>,
    pub country_files: Vec<CountryFile>,
    pub wonder_groups: Vec<WonderGroup>,
}
