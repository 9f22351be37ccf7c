use tracing::debug;
use whl_model::{SiteId, Visit, VisitLinks, WonderId};

use crate::error::{Dataset, IngestError, Result};
use crate::manifest::SourceFormat;
use crate::rows::{check_count, collect_rows, optional_id, optional_url};

/// Parse the personal visit records.
///
/// Each source record carries three optional target IDs; the tagged
/// [`Visit`] built here enforces that exactly one is set, so a record with
/// zero or two targets fails with its row index.
pub fn parse_visits(
    payload: &str,
    format: SourceFormat,
    expected: Option<usize>,
) -> Result<Vec<Visit>> {
    let dataset = Dataset::Visits;
    if format != SourceFormat::JsonArray {
        return Err(IngestError::UnsupportedFormat { dataset, format });
    }
    let rows = collect_rows(dataset, payload, format)?;
    let mut visits = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let wonder = optional_id(dataset, index, row, "wonder")?.map(WonderId);
        let whs = optional_id(dataset, index, row, "whs")?.map(SiteId);
        let twhs = optional_id(dataset, index, row, "twhs")?.map(SiteId);
        let links = VisitLinks {
            visit: optional_url(dataset, index, row, "visit")?,
            stay: optional_url(dataset, index, row, "stay")?,
            eat: optional_url(dataset, index, row, "eat")?,
        };
        let visit = Visit::from_fields(wonder, whs, twhs, links)
            .map_err(|source| IngestError::Visit { index, source })?;
        visits.push(visit);
    }
    check_count(dataset, expected, visits.len())?;
    debug!(count = visits.len(), "parsed visits");
    Ok(visits)
}
