use tracing::debug;
use whl_model::CountryFile;

use crate::error::{Dataset, IngestError, Result};
use crate::manifest::SourceFormat;
use crate::rows::{check_count, collect_rows, optional_str, optional_url, parse_code, require_str};

/// Parse the per-country reference files. Sparse by design: most countries
/// have no entry.
pub fn parse_country_files(
    payload: &str,
    format: SourceFormat,
    expected: Option<usize>,
) -> Result<Vec<CountryFile>> {
    let dataset = Dataset::CountryFiles;
    if format != SourceFormat::JsonArray {
        return Err(IngestError::UnsupportedFormat { dataset, format });
    }
    let rows = collect_rows(dataset, payload, format)?;
    let mut files = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let raw_code = require_str(dataset, index, row, &["iso", "alpha2"])?;
        files.push(CountryFile {
            code: parse_code(dataset, index, "iso", &raw_code)?,
            file: optional_url(dataset, index, row, "file")?,
            name: optional_str(row, &["name"]),
        });
    }
    check_count(dataset, expected, files.len())?;
    files.sort_by(|a, b| a.code.cmp(&b.code));
    debug!(count = files.len(), "parsed country files");
    Ok(files)
}
