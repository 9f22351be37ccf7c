use std::collections::BTreeSet;

use regex::Regex;
use tracing::debug;
use whl_model::{CountryCodes, SiteId, TentativeSite};

use crate::error::{Dataset, IngestError, Result};
use crate::inscribed::{SITE_CODE_KEYS, SITE_ID_KEYS, SITE_NAME_KEYS};
use crate::manifest::SourceFormat;
use crate::rows::{
    check_count, code_field, collect_rows, optional_date, parse_date, require_id, require_str,
};

/// Parse the Tentative-List (TWHS) dataset.
///
/// Vintages: a flat JSON array, and the scraped Tentative Lists page itself.
pub fn parse_tentative(
    payload: &str,
    format: SourceFormat,
    expected: Option<usize>,
) -> Result<Vec<TentativeSite>> {
    let dataset = Dataset::Tentative;
    let mut sites = match format {
        SourceFormat::JsonArray => tentative_from_rows(payload)?,
        SourceFormat::Markup => scrape_tentative(payload)?,
        _ => return Err(IngestError::UnsupportedFormat { dataset, format }),
    };
    check_count(dataset, expected, sites.len())?;
    sites.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    debug!(count = sites.len(), "parsed tentative sites");
    Ok(sites)
}

fn tentative_from_rows(payload: &str) -> Result<Vec<TentativeSite>> {
    let dataset = Dataset::Tentative;
    let rows = collect_rows(dataset, payload, SourceFormat::JsonArray)?;
    let mut sites = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        sites.push(TentativeSite {
            id: SiteId(require_id(dataset, index, row, SITE_ID_KEYS)?),
            name: require_str(dataset, index, row, SITE_NAME_KEYS)?,
            countries: CountryCodes::new(code_field(row, SITE_CODE_KEYS)),
            submitted: optional_date(dataset, index, row, &["submitted"])?,
        });
    }
    Ok(sites)
}

/// Entity links on the page; the ID is the only capture.
const LINK_PATTERN: &str = r#"href="[^"]*/en/tentativelists/(\d+)"#;

/// Full row triple: (id, name) from the anchor cell, then the country cell
/// and the submission-date cell.
const ROW_PATTERN: &str = concat!(
    r#"(?s)<tr[^>]*>\s*<td[^>]*>\s*"#,
    r#"<a href="[^"]*/en/tentativelists/(\d+)/?"[^>]*>([^<]+)</a>\s*</td>\s*"#,
    r#"<td[^>]*>([^<]*)</td>\s*"#,
    r#"<td[^>]*>([^<]*)</td>"#,
);

/// Scrape the Tentative Lists page.
///
/// Two independent extraction passes (every entity link, and every full
/// row) must agree on the ID set. A divergence means the row pattern
/// missed a record (or the page grew a stray link) and is reported with the
/// symmetric difference of IDs so the unmatched record can be located.
fn scrape_tentative(payload: &str) -> Result<Vec<TentativeSite>> {
    let dataset = Dataset::Tentative;
    let link_pattern =
        Regex::new(LINK_PATTERN).map_err(|source| IngestError::Pattern { source })?;
    let row_pattern = Regex::new(ROW_PATTERN).map_err(|source| IngestError::Pattern { source })?;

    let mut link_count = 0usize;
    let mut link_ids: BTreeSet<u32> = BTreeSet::new();
    for captures in link_pattern.captures_iter(payload) {
        link_count += 1;
        if let Ok(id) = captures[1].parse::<u32>() {
            link_ids.insert(id);
        }
    }

    let mut sites = Vec::new();
    let mut row_ids: BTreeSet<u32> = BTreeSet::new();
    for captures in row_pattern.captures_iter(payload) {
        let index = sites.len();
        let id: u32 = captures[1].parse().map_err(|_| IngestError::InvalidValue {
            dataset,
            index,
            key: String::from("id"),
            value: captures[1].to_owned(),
            detail: String::from("expected a numeric id"),
        })?;
        let submitted = match captures[4].trim() {
            "" => None,
            raw => Some(parse_date(dataset, index, "submitted", raw)?),
        };
        row_ids.insert(id);
        sites.push(TentativeSite {
            id: SiteId(id),
            name: unescape(captures[2].trim()),
            countries: CountryCodes::new(captures[3].trim().to_owned()),
            submitted,
        });
    }

    if link_count != sites.len() || link_ids != row_ids {
        let unmatched: Vec<u32> = link_ids.symmetric_difference(&row_ids).copied().collect();
        return Err(IngestError::MarkupDivergence {
            links: link_count,
            rows: sites.len(),
            unmatched,
        });
    }
    Ok(sites)
}

/// The handful of entities the page actually uses in site names.
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}
