//! Joins the parsed snapshot datasets into one per-country view.
//!
//! Construction validates visit referential integrity (fatal) and audits
//! site country codes (warned, never swallowed). Lookups afterwards are
//! read-only; the view is built once per run and discarded with the report.

pub mod error;
pub mod visits;

pub use error::{IntegrityError, IntegrityIssue};
pub use visits::VisitIndex;

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;
use whl_model::{
    Alpha2, Country, CountryFile, InscribedSite, OrphanAttribution, SiteId, SnapshotEntities,
    TentativeSite, VisitLinks, WonderGroup, WonderId,
};

/// Join view over one validated snapshot.
#[derive(Debug)]
pub struct Reconciler {
    countries: Vec<Country>,
    members: BTreeSet<Alpha2>,
    inscribed: Vec<InscribedSite>,
    tentative: Vec<TentativeSite>,
    visits: VisitIndex,
    files: BTreeMap<Alpha2, CountryFile>,
    wonder_groups: Vec<WonderGroup>,
    orphan: OrphanAttribution,
}

impl Reconciler {
    pub fn new(
        entities: SnapshotEntities,
        orphan: OrphanAttribution,
    ) -> Result<Self, IntegrityError> {
        let SnapshotEntities {
            countries,
            members,
            inscribed,
            tentative,
            visits,
            country_files,
            wonder_groups,
        } = entities;

        let whs_ids: BTreeSet<SiteId> = inscribed.iter().map(|site| site.id).collect();
        let twhs_ids: BTreeSet<SiteId> = tentative.iter().map(|site| site.id).collect();
        let wonder_ids: BTreeSet<WonderId> = wonder_groups
            .iter()
            .flat_map(|group| group.wonders.iter().chain(&group.finalists))
            .map(|wonder| wonder.id)
            .collect();
        let visits = VisitIndex::build(&visits, &whs_ids, &twhs_ids, &wonder_ids)?;

        audit_country_codes(&inscribed, &tentative, &orphan);

        let mut files: BTreeMap<Alpha2, CountryFile> = BTreeMap::new();
        for file in country_files {
            if files.contains_key(&file.code) {
                warn!(code = %file.code, "duplicate country file entry, keeping the first");
            } else {
                files.insert(file.code.clone(), file);
            }
        }

        Ok(Self {
            countries,
            members: members.into_iter().map(|member| member.code).collect(),
            inscribed,
            tentative,
            visits,
            files,
            wonder_groups,
            orphan,
        })
    }

    /// Countries eligible for the report: present in the member set, in the
    /// name order the country parser fixed.
    pub fn member_countries(&self) -> impl Iterator<Item = &Country> {
        self.countries
            .iter()
            .filter(|country| self.members.contains(&country.code))
    }

    /// Inscribed sites joined to `country` through the code field, plus the
    /// orphan site when `country` is its designated home. Each site appears
    /// at most once even when both paths produce it.
    pub fn whs_for_country(&self, country: &Country) -> Vec<&InscribedSite> {
        let mut sites: Vec<&InscribedSite> = self
            .inscribed
            .iter()
            .filter(|site| site.countries.contains(&country.code))
            .collect();
        if country.code == self.orphan.country {
            if let Some(site) = self
                .inscribed
                .iter()
                .find(|site| site.id == self.orphan.site)
            {
                if !sites.iter().any(|existing| existing.id == site.id) {
                    sites.push(site);
                }
            }
        }
        sites
    }

    /// Tentative sites joined to `country` through the code field.
    pub fn twhs_for_country(&self, country: &Country) -> Vec<&TentativeSite> {
        self.tentative
            .iter()
            .filter(|site| site.countries.contains(&country.code))
            .collect()
    }

    pub fn visit_for_whs(&self, id: SiteId) -> Option<&VisitLinks> {
        self.visits.whs(id)
    }

    pub fn visit_for_twhs(&self, id: SiteId) -> Option<&VisitLinks> {
        self.visits.twhs(id)
    }

    pub fn visit_for_wonder(&self, id: WonderId) -> Option<&VisitLinks> {
        self.visits.wonder(id)
    }

    pub fn file_for(&self, country: &Country) -> Option<&CountryFile> {
        self.files.get(&country.code)
    }

    pub fn wonder_groups(&self) -> &[WonderGroup] {
        &self.wonder_groups
    }

    pub fn inscribed_count(&self) -> usize {
        self.inscribed.len()
    }

    pub fn tentative_count(&self) -> usize {
        self.tentative.len()
    }
}

/// Empty country codes outside the documented exception are data-quality
/// defects: reported on the diagnostic channel, never fatal, never silent.
fn audit_country_codes(
    inscribed: &[InscribedSite],
    tentative: &[TentativeSite],
    orphan: &OrphanAttribution,
) {
    for site in inscribed {
        if site.countries.is_empty() && site.id != orphan.site {
            warn!(site = %site.id, name = %site.name, "inscribed site has no country codes");
        }
    }
    for site in tentative {
        if site.countries.is_empty() {
            warn!(site = %site.id, name = %site.name, "tentative site has no country codes");
        }
    }
}
