use tracing::debug;
use whl_model::Member;

use crate::error::{Dataset, IngestError, Result};
use crate::manifest::SourceFormat;
use crate::rows::{check_count, collect_rows, parse_code, parse_date, require_str};

/// Parse the UNESCO member-state list. Only countries present here are
/// eligible for the report.
pub fn parse_members(
    payload: &str,
    format: SourceFormat,
    expected: Option<usize>,
) -> Result<Vec<Member>> {
    let dataset = Dataset::Members;
    if format != SourceFormat::JsonArray {
        return Err(IngestError::UnsupportedFormat { dataset, format });
    }
    let rows = collect_rows(dataset, payload, format)?;
    let mut members = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let raw_code = require_str(dataset, index, row, &["iso", "alpha2"])?;
        let joined = require_str(dataset, index, row, &["joined"])?;
        members.push(Member {
            code: parse_code(dataset, index, "iso", &raw_code)?,
            name: require_str(dataset, index, row, &["name"])?,
            joined: parse_date(dataset, index, "joined", &joined)?,
            region: require_str(dataset, index, row, &["region"])?,
        });
    }
    check_count(dataset, expected, members.len())?;
    members.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(count = members.len(), "parsed members");
    Ok(members)
}
