use std::fmt;

use thiserror::Error;
use whl_model::ModelError;

use crate::manifest::SourceFormat;

/// Which dataset an ingest failure belongs to. Every error is labeled so a
/// failing run names the offending source file's role directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Manifest,
    Countries,
    Members,
    Inscribed,
    Tentative,
    Visits,
    CountryFiles,
    Wonders,
}

impl Dataset {
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Manifest => "manifest",
            Dataset::Countries => "countries",
            Dataset::Members => "members",
            Dataset::Inscribed => "inscribed sites",
            Dataset::Tentative => "tentative sites",
            Dataset::Visits => "visits",
            Dataset::CountryFiles => "country files",
            Dataset::Wonders => "wonders",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{dataset}: invalid JSON payload: {source}")]
    Json {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },

    #[error("{dataset}: invalid CSV payload: {source}")]
    Csv {
        dataset: Dataset,
        #[source]
        source: csv::Error,
    },

    #[error("{dataset}: payload is not {expected}")]
    UnexpectedShape {
        dataset: Dataset,
        expected: &'static str,
    },

    #[error("{dataset}: source format `{format}` is not supported for this dataset")]
    UnsupportedFormat {
        dataset: Dataset,
        format: SourceFormat,
    },

    #[error("{dataset}: record {index}: none of the keys [{tried}] is present")]
    MissingKey {
        dataset: Dataset,
        index: usize,
        tried: String,
    },

    #[error("{dataset}: record {index}: key `{key}` has unusable value {value:?}: {detail}")]
    InvalidValue {
        dataset: Dataset,
        index: usize,
        key: String,
        value: String,
        detail: String,
    },

    #[error("{dataset}: parsed {actual} records but the snapshot expects {expected}")]
    CountMismatch {
        dataset: Dataset,
        expected: usize,
        actual: usize,
    },

    #[error("{dataset}: parsed {actual} {subset} but the snapshot expects {expected}")]
    SubsetCount {
        dataset: Dataset,
        subset: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("countries: duplicate alpha-2 codes: {codes:?}")]
    DuplicateCountryCodes { codes: Vec<String> },

    #[error(
        "tentative sites: link scan found {links} entries, row scan found {rows}; \
         unmatched ids: {unmatched:?}"
    )]
    MarkupDivergence {
        links: usize,
        rows: usize,
        unmatched: Vec<u32>,
    },

    #[error("tentative sites: scrape pattern failed to compile: {source}")]
    Pattern {
        #[source]
        source: regex::Error,
    },

    #[error("visits: record {index}: {source}")]
    Visit {
        index: usize,
        #[source]
        source: ModelError,
    },

    #[error("wonders: duplicate wonder ids: {ids:?}")]
    DuplicateWonderIds { ids: Vec<u32> },

    #[error("wonders: {title:?} (id {id}) is filed as a {expected} but its rank says otherwise")]
    MisfiledWonder {
        title: String,
        id: u32,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
