use tracing::debug;
use whl_model::{CountryCodes, InscribedSite, SiteId};

use crate::error::{Dataset, IngestError, Result};
use crate::manifest::SourceFormat;
use crate::rows::{check_count, code_field, collect_csv_rows, collect_rows, require_id, require_str};

/// Site-ID key across dataset vintages.
pub(crate) const SITE_ID_KEYS: &[&str] = &["id_no", "id_number", "site_id"];
/// Display-name key across dataset vintages.
pub(crate) const SITE_NAME_KEYS: &[&str] = &["name_en", "name", "site"];
/// Country-code key across dataset vintages.
pub(crate) const SITE_CODE_KEYS: &[&str] = &["iso_code", "iso", "states"];

/// Parse the inscribed-site (WHS) list.
///
/// Vintages: a flat JSON array, the `query.row` spreadsheet-export wrapper,
/// and the raw CSV the wrapper was built from. The country-code field is
/// kept verbatim, empty included; reconciliation decides what an empty
/// field means.
pub fn parse_inscribed(
    payload: &str,
    format: SourceFormat,
    expected: Option<usize>,
) -> Result<Vec<InscribedSite>> {
    let dataset = Dataset::Inscribed;
    let rows = match format {
        SourceFormat::JsonArray | SourceFormat::QueryRows => {
            collect_rows(dataset, payload, format)?
        }
        SourceFormat::Csv => collect_csv_rows(dataset, payload)?,
        SourceFormat::JsonKeyed | SourceFormat::Markup => {
            return Err(IngestError::UnsupportedFormat { dataset, format });
        }
    };

    let mut sites = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        sites.push(InscribedSite {
            id: SiteId(require_id(dataset, index, row, SITE_ID_KEYS)?),
            name: require_str(dataset, index, row, SITE_NAME_KEYS)?,
            countries: CountryCodes::new(code_field(row, SITE_CODE_KEYS)),
        });
    }
    check_count(dataset, expected, sites.len())?;

    // The spreadsheet-export vintage was keyed by site ID upstream; every
    // later vintage sorts by name.
    match format {
        SourceFormat::QueryRows => sites.sort_by_key(|site| site.id),
        _ => sites.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))),
    }
    debug!(count = sites.len(), "parsed inscribed sites");
    Ok(sites)
}
