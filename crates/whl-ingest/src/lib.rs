pub mod countries;
pub mod country_files;
pub mod error;
pub mod inscribed;
pub mod manifest;
pub mod members;
mod rows;
pub mod tentative;
pub mod visits;
pub mod wonders;

pub use countries::parse_countries;
pub use country_files::parse_country_files;
pub use error::{Dataset, IngestError, Result};
pub use inscribed::parse_inscribed;
pub use manifest::{DatasetEntry, SnapshotManifest, SourceFormat, WondersEntry};
pub use members::parse_members;
pub use tentative::parse_tentative;
pub use visits::parse_visits;
pub use wonders::{WonderExpectations, parse_wonder_groups};

use tracing::info;
use whl_model::SnapshotEntities;

/// Raw payloads for one snapshot, one string per dataset, already read from
/// wherever they live. Parsers never touch the filesystem.
#[derive(Debug, Clone, Default)]
pub struct SnapshotPayloads {
    pub countries: String,
    pub members: String,
    pub inscribed: String,
    pub tentative: String,
    pub visits: String,
    pub country_files: String,
    pub wonders: String,
}

/// Parse every dataset of a snapshot, enforcing the manifest's formats and
/// expected counts. Any failure aborts the load; nothing downstream sees
/// partially-parsed data.
pub fn load_snapshot(
    manifest: &SnapshotManifest,
    payloads: &SnapshotPayloads,
) -> Result<SnapshotEntities> {
    let countries = parse_countries(
        &payloads.countries,
        manifest.countries.format,
        manifest.countries.expected,
    )?;
    let members = parse_members(
        &payloads.members,
        manifest.members.format,
        manifest.members.expected,
    )?;
    let inscribed = parse_inscribed(
        &payloads.inscribed,
        manifest.inscribed.format,
        manifest.inscribed.expected,
    )?;
    let tentative = parse_tentative(
        &payloads.tentative,
        manifest.tentative.format,
        manifest.tentative.expected,
    )?;
    let visits = parse_visits(
        &payloads.visits,
        manifest.visits.format,
        manifest.visits.expected,
    )?;
    let country_files = parse_country_files(
        &payloads.country_files,
        manifest.country_files.format,
        manifest.country_files.expected,
    )?;
    let wonder_groups = parse_wonder_groups(
        &payloads.wonders,
        manifest.wonders.format,
        &manifest.wonders.expectations(),
    )?;
    info!(snapshot = %manifest.label, "snapshot parsed");
    Ok(SnapshotEntities {
        countries,
        members,
        inscribed,
        tentative,
        visits,
        country_files,
        wonder_groups,
    })
}
