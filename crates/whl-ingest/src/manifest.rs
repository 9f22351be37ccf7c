//! Snapshot manifest: which file holds each dataset, how it is laid out,
//! and how many records that snapshot of the upstream lists is known to
//! contain.
//!
//! Expected counts evolve as UNESCO updates the lists, so they are
//! parameters of the snapshot rather than constants anywhere in code. A
//! parse that does not reproduce the manifest's count is fatal before any
//! join runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Dataset, IngestError, Result};
use crate::wonders::WonderExpectations;

/// How a dataset payload is laid out.
///
/// Dataset vintages changed shape over the years; every shape that ever
/// shipped stays parseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    /// Flat JSON array of records.
    JsonArray,
    /// JSON object keyed by record code, one record per value.
    JsonKeyed,
    /// `{"query": {"row": [...]}}` wrapper mirroring a spreadsheet export.
    QueryRows,
    /// CSV with a header row, same columns as the JSON vintages.
    Csv,
    /// Scraped HTML, fields extracted by pattern.
    Markup,
}

impl SourceFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceFormat::JsonArray => "json-array",
            SourceFormat::JsonKeyed => "json-keyed",
            SourceFormat::QueryRows => "query-rows",
            SourceFormat::Csv => "csv",
            SourceFormat::Markup => "markup",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dataset's entry in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub path: String,
    pub format: SourceFormat,
    /// Record count this snapshot is known to hold; `None` skips the check
    /// for datasets with no published size (visits, country files).
    #[serde(default)]
    pub expected: Option<usize>,
}

/// The wonders dataset carries three counts: groups, wonders, finalists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WondersEntry {
    pub path: String,
    pub format: SourceFormat,
    #[serde(default)]
    pub expected_groups: Option<usize>,
    #[serde(default)]
    pub expected_wonders: Option<usize>,
    #[serde(default)]
    pub expected_finalists: Option<usize>,
}

impl WondersEntry {
    pub fn expectations(&self) -> WonderExpectations {
        WonderExpectations {
            groups: self.expected_groups,
            wonders: self.expected_wonders,
            finalists: self.expected_finalists,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotManifest {
    /// Human label for the snapshot, usually the capture date.
    pub label: String,
    pub countries: DatasetEntry,
    pub members: DatasetEntry,
    pub inscribed: DatasetEntry,
    pub tentative: DatasetEntry,
    pub visits: DatasetEntry,
    pub country_files: DatasetEntry,
    pub wonders: WondersEntry,
}

impl SnapshotManifest {
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|source| IngestError::Json {
            dataset: Dataset::Manifest,
            source,
        })
    }
}
