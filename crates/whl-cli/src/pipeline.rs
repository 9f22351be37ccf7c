//! Loads a snapshot directory and wires the pipeline: read, parse,
//! validate, reconcile. All filesystem access of the run happens here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use whl_ingest::{SnapshotManifest, SnapshotPayloads, load_snapshot};
use whl_model::OrphanAttribution;
use whl_reconcile::Reconciler;

/// Read `manifest.json` and every dataset payload it names, parse and
/// validate them, and build the join view.
pub fn load_reconciler(snapshot_dir: &Path) -> Result<Reconciler> {
    let manifest_path = snapshot_dir.join("manifest.json");
    let manifest_payload = fs::read_to_string(&manifest_path)
        .with_context(|| format!("read manifest: {}", manifest_path.display()))?;
    let manifest = SnapshotManifest::from_json(&manifest_payload)?;

    let payloads = SnapshotPayloads {
        countries: read_payload(snapshot_dir, &manifest.countries.path)?,
        members: read_payload(snapshot_dir, &manifest.members.path)?,
        inscribed: read_payload(snapshot_dir, &manifest.inscribed.path)?,
        tentative: read_payload(snapshot_dir, &manifest.tentative.path)?,
        visits: read_payload(snapshot_dir, &manifest.visits.path)?,
        country_files: read_payload(snapshot_dir, &manifest.country_files.path)?,
        wonders: read_payload(snapshot_dir, &manifest.wonders.path)?,
    };
    let entities = load_snapshot(&manifest, &payloads)?;
    info!(snapshot = %manifest.label, "snapshot loaded");

    let reconciler = Reconciler::new(entities, OrphanAttribution::default())?;
    Ok(reconciler)
}

fn read_payload(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).with_context(|| format!("read dataset: {}", path.display()))
}
