use std::collections::{BTreeMap, BTreeSet};

use whl_model::{SiteId, Visit, VisitKind, VisitLinks, VisitTarget, WonderId};

use crate::error::{IntegrityError, IntegrityIssue};

/// Visit lookups keyed by target ID.
///
/// Built once at validation time; `visit_for` lookups afterwards are plain
/// map reads and never re-check the invariants.
#[derive(Debug, Default)]
pub struct VisitIndex {
    wonder: BTreeMap<WonderId, VisitLinks>,
    whs: BTreeMap<SiteId, VisitLinks>,
    twhs: BTreeMap<SiteId, VisitLinks>,
}

impl VisitIndex {
    /// Validate every visit against the full target-ID sets and build the
    /// lookup maps.
    ///
    /// Unknown-target ("wrong") and duplicate visits are collected
    /// exhaustively across all three kinds before failing, so a bad visits
    /// file surfaces every offender in one run.
    pub fn build(
        visits: &[Visit],
        whs_ids: &BTreeSet<SiteId>,
        twhs_ids: &BTreeSet<SiteId>,
        wonder_ids: &BTreeSet<WonderId>,
    ) -> Result<Self, IntegrityError> {
        let mut index = VisitIndex::default();
        let mut unknown: BTreeMap<VisitKind, BTreeSet<u32>> = BTreeMap::new();
        let mut duplicate: BTreeMap<VisitKind, BTreeSet<u32>> = BTreeMap::new();

        for visit in visits {
            match visit.target {
                VisitTarget::Wonder(id) => {
                    if !wonder_ids.contains(&id) {
                        unknown.entry(VisitKind::Wonder).or_default().insert(id.0);
                    }
                    if index.wonder.insert(id, visit.links.clone()).is_some() {
                        duplicate.entry(VisitKind::Wonder).or_default().insert(id.0);
                    }
                }
                VisitTarget::Inscribed(id) => {
                    if !whs_ids.contains(&id) {
                        unknown.entry(VisitKind::Inscribed).or_default().insert(id.0);
                    }
                    if index.whs.insert(id, visit.links.clone()).is_some() {
                        duplicate
                            .entry(VisitKind::Inscribed)
                            .or_default()
                            .insert(id.0);
                    }
                }
                VisitTarget::Tentative(id) => {
                    if !twhs_ids.contains(&id) {
                        unknown
                            .entry(VisitKind::Tentative)
                            .or_default()
                            .insert(id.0);
                    }
                    if index.twhs.insert(id, visit.links.clone()).is_some() {
                        duplicate
                            .entry(VisitKind::Tentative)
                            .or_default()
                            .insert(id.0);
                    }
                }
            }
        }

        let mut issues = Vec::new();
        for (kind, ids) in unknown {
            issues.push(IntegrityIssue::UnknownTargets {
                kind,
                ids: ids.into_iter().collect(),
            });
        }
        for (kind, ids) in duplicate {
            issues.push(IntegrityIssue::DuplicateTargets {
                kind,
                ids: ids.into_iter().collect(),
            });
        }
        if issues.is_empty() {
            Ok(index)
        } else {
            Err(IntegrityError { issues })
        }
    }

    pub fn whs(&self, id: SiteId) -> Option<&VisitLinks> {
        self.whs.get(&id)
    }

    pub fn twhs(&self, id: SiteId) -> Option<&VisitLinks> {
        self.twhs.get(&id)
    }

    pub fn wonder(&self, id: WonderId) -> Option<&VisitLinks> {
        self.wonder.get(&id)
    }
}
