use std::collections::BTreeMap;

use tracing::debug;
use whl_model::Country;

use crate::error::{Dataset, IngestError, Result};
use crate::manifest::SourceFormat;
use crate::rows::{check_count, collect_rows, optional_url, parse_code, require_str};

/// Parse the ISO 3166-1 country list.
///
/// Two vintages exist: an object keyed by alpha-2 code (each value repeating
/// the code) and a flat array. The result is sorted by display name, which
/// fixes the report's country order.
pub fn parse_countries(
    payload: &str,
    format: SourceFormat,
    expected: Option<usize>,
) -> Result<Vec<Country>> {
    let dataset = Dataset::Countries;
    if !matches!(format, SourceFormat::JsonArray | SourceFormat::JsonKeyed) {
        return Err(IngestError::UnsupportedFormat { dataset, format });
    }
    let rows = collect_rows(dataset, payload, format)?;
    let mut countries = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let raw_code = require_str(dataset, index, row, &["alpha2"])?;
        countries.push(Country {
            code: parse_code(dataset, index, "alpha2", &raw_code)?,
            alpha3: require_str(dataset, index, row, &["alpha3"])?,
            name: require_str(dataset, index, row, &["name"])?,
            official_name: require_str(dataset, index, row, &["official_name", "officialName"])?,
            numeric: require_str(dataset, index, row, &["numeric"])?,
            wiki_url: optional_url(dataset, index, row, "wiki_url")?
                .or(optional_url(dataset, index, row, "wikiUrl")?),
            unofficial: row
                .get("unofficial")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false),
            wiki_entry: optional_url(dataset, index, row, "wiki_entry")?
                .or(optional_url(dataset, index, row, "wikiEntry")?),
        });
    }

    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for country in &countries {
        *seen.entry(country.code.as_str().to_owned()).or_default() += 1;
    }
    let duplicates: Vec<String> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(code, _)| code)
        .collect();
    if !duplicates.is_empty() {
        return Err(IngestError::DuplicateCountryCodes { codes: duplicates });
    }

    check_count(dataset, expected, countries.len())?;
    countries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
    debug!(count = countries.len(), "parsed countries");
    Ok(countries)
}
