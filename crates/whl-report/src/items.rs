//! The renderer-agnostic report model: an ordered sequence of line items.

use serde::Serialize;

use crate::stats::{SiteTally, WonderTally};

/// Which report the sequence describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    Sitelist,
    Wonderlist,
}

/// How a site line is typeset. Tentative and finalist runs render in
/// italics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SiteKind {
    Inscribed,
    Tentative,
    Wonder,
    Finalist,
}

/// Totals carried by the closing line of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ReportTotals {
    Sites(SiteTally),
    Wonders(WonderTally),
}

/// One line of the report, in final order. The renderer only formats; all
/// ordering and joining decisions are made by the builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LineItem {
    Header(ReportKind),
    CountryHeader {
        name: String,
        link: String,
        whs_count: usize,
        twhs_count: usize,
        file_link: Option<String>,
    },
    GroupHeader {
        title: String,
        link: String,
    },
    SiteLine {
        kind: SiteKind,
        name: String,
        link: String,
        visited: bool,
        /// (label, url) pairs from the visit record, in render order.
        extra_links: Vec<(String, String)>,
    },
    EmptyCountryNote,
    Footer(ReportTotals),
}
