//! Walks the reconciled view in report order and produces the line-item
//! sequence plus the coverage tally for each report.

use tracing::debug;
use whl_model::{Alpha2, SiteId, VisitLinks, Wonder};
use whl_reconcile::Reconciler;

use crate::items::{LineItem, ReportKind, ReportTotals, SiteKind};
use crate::stats::{SiteTally, VisitedAccumulator, WonderTally};

/// The sitelist: one section per member country, inscribed sites first.
#[derive(Debug, Clone, PartialEq)]
pub struct SitelistReport {
    pub items: Vec<LineItem>,
    pub tally: SiteTally,
}

/// The wonderlist: one section per group, wonders before finalists.
#[derive(Debug, Clone, PartialEq)]
pub struct WonderlistReport {
    pub items: Vec<LineItem>,
    pub tally: WonderTally,
}

pub fn build_sitelist(recon: &Reconciler) -> SitelistReport {
    let mut acc = VisitedAccumulator::default();
    let mut items = vec![LineItem::Header(ReportKind::Sitelist)];
    let mut country_count = 0usize;

    for country in recon.member_countries() {
        country_count += 1;
        let mut whs = recon.whs_for_country(country);
        whs.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        let mut twhs = recon.twhs_for_country(country);
        twhs.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        items.push(LineItem::CountryHeader {
            name: country.name.clone(),
            link: country_link(&country.code),
            whs_count: whs.len(),
            twhs_count: twhs.len(),
            file_link: recon
                .file_for(country)
                .and_then(|file| file.file.as_ref())
                .map(|url| url.to_string()),
        });

        if whs.is_empty() && twhs.is_empty() {
            items.push(LineItem::EmptyCountryNote);
            continue;
        }
        for site in whs {
            let visit = recon.visit_for_whs(site.id);
            if visit.is_some() {
                acc.record_whs(site.id);
            }
            items.push(site_line(
                SiteKind::Inscribed,
                &site.name,
                whs_link(site.id),
                visit,
            ));
        }
        for site in twhs {
            let visit = recon.visit_for_twhs(site.id);
            if visit.is_some() {
                acc.record_twhs(site.id);
            }
            items.push(site_line(
                SiteKind::Tentative,
                &site.name,
                twhs_link(site.id),
                visit,
            ));
        }
    }

    let tally = SiteTally {
        inscribed_total: recon.inscribed_count(),
        tentative_total: recon.tentative_count(),
        inscribed_visited: acc.whs_count(),
        tentative_visited: acc.twhs_count(),
    };
    items.push(LineItem::Footer(ReportTotals::Sites(tally)));
    debug!(
        countries = country_count,
        whs_visited = tally.inscribed_visited,
        twhs_visited = tally.tentative_visited,
        "sitelist built"
    );
    SitelistReport { items, tally }
}

pub fn build_wonderlist(recon: &Reconciler) -> WonderlistReport {
    let mut acc = VisitedAccumulator::default();
    let mut items = vec![LineItem::Header(ReportKind::Wonderlist)];
    let mut wonders_total = 0usize;
    let mut finalists_total = 0usize;

    for group in recon.wonder_groups() {
        items.push(LineItem::GroupHeader {
            title: group.title.clone(),
            link: group.url.to_string(),
        });
        push_wonder_lines(recon, &group.wonders, SiteKind::Wonder, &mut acc, &mut items);
        push_wonder_lines(
            recon,
            &group.finalists,
            SiteKind::Finalist,
            &mut acc,
            &mut items,
        );
        wonders_total += group.wonders.len();
        finalists_total += group.finalists.len();
    }

    let (wonders_visited, finalists_visited) = acc.wonder_split();
    let tally = WonderTally {
        wonders_total,
        finalists_total,
        wonders_visited,
        finalists_visited,
    };
    items.push(LineItem::Footer(ReportTotals::Wonders(tally)));
    debug!(
        groups = recon.wonder_groups().len(),
        visited = tally.visited(),
        "wonderlist built"
    );
    WonderlistReport { items, tally }
}

fn push_wonder_lines(
    recon: &Reconciler,
    subset: &[Wonder],
    kind: SiteKind,
    acc: &mut VisitedAccumulator,
    items: &mut Vec<LineItem>,
) {
    let mut ordered: Vec<&Wonder> = subset.iter().collect();
    ordered.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
    for wonder in ordered {
        let visit = recon.visit_for_wonder(wonder.id);
        if visit.is_some() {
            acc.record_wonder(wonder.id);
        }
        // Wonder lines carry the visit link only; stay/eat belong to the
        // site lists.
        let extra_links = visit
            .and_then(|links| links.visit.as_ref())
            .map(|url| vec![(String::from("Visit"), url.to_string())])
            .unwrap_or_default();
        items.push(LineItem::SiteLine {
            kind,
            name: wonder.title.clone(),
            link: wonder.url.to_string(),
            visited: visit.is_some(),
            extra_links,
        });
    }
}

fn site_line(kind: SiteKind, name: &str, link: String, visit: Option<&VisitLinks>) -> LineItem {
    let extra_links = visit
        .map(|links| {
            links
                .labeled()
                .into_iter()
                .map(|(label, url)| (label.to_owned(), url.to_string()))
                .collect()
        })
        .unwrap_or_default();
    LineItem::SiteLine {
        kind,
        name: name.to_owned(),
        link,
        visited: visit.is_some(),
        extra_links,
    }
}

fn country_link(code: &Alpha2) -> String {
    format!("https://whc.unesco.org/en/statesparties/{code}/")
}

fn whs_link(id: SiteId) -> String {
    format!("https://whc.unesco.org/en/list/{id}")
}

fn twhs_link(id: SiteId) -> String {
    format!("https://whc.unesco.org/en/tentativelists/{id}")
}
