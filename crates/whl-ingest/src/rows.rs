//! Shared row plumbing: locating the record collection inside each payload
//! shape, and normalizing field-name vintages into canonical values.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use url::Url;
use whl_model::Alpha2;

use crate::error::{Dataset, IngestError, Result};
use crate::manifest::SourceFormat;

pub(crate) type Row = Map<String, Value>;

/// Locate the record collection for `format` inside `payload`.
///
/// `Markup` payloads have no row structure and are handled by the tentative
/// scraper directly.
pub(crate) fn collect_rows(dataset: Dataset, payload: &str, format: SourceFormat) -> Result<Vec<Row>> {
    let root: Value =
        serde_json::from_str(payload).map_err(|source| IngestError::Json { dataset, source })?;
    match format {
        SourceFormat::JsonArray => rows_from_array(dataset, &root),
        SourceFormat::JsonKeyed => {
            let object = root.as_object().ok_or(IngestError::UnexpectedShape {
                dataset,
                expected: "a JSON object keyed by code",
            })?;
            object
                .values()
                .map(|value| {
                    value.as_object().cloned().ok_or(IngestError::UnexpectedShape {
                        dataset,
                        expected: "an object per key",
                    })
                })
                .collect()
        }
        SourceFormat::QueryRows => {
            let rows = root
                .get("query")
                .and_then(|query| query.get("row"))
                .ok_or(IngestError::UnexpectedShape {
                    dataset,
                    expected: "a query/row wrapper",
                })?;
            rows_from_array(dataset, rows)
        }
        SourceFormat::Csv | SourceFormat::Markup => Err(IngestError::UnsupportedFormat {
            dataset,
            format,
        }),
    }
}

fn rows_from_array(dataset: Dataset, value: &Value) -> Result<Vec<Row>> {
    let array = value.as_array().ok_or(IngestError::UnexpectedShape {
        dataset,
        expected: "a JSON array of records",
    })?;
    array
        .iter()
        .map(|entry| {
            entry.as_object().cloned().ok_or(IngestError::UnexpectedShape {
                dataset,
                expected: "an object per record",
            })
        })
        .collect()
}

/// Read a CSV payload into the same row shape as the JSON vintages, one
/// string-valued field per header column.
pub(crate) fn collect_csv_rows(dataset: Dataset, payload: &str) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(payload.as_bytes());
    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv { dataset, source })?
        .clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv { dataset, source })?;
        let mut row = Row::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_owned(), Value::String(field.to_owned()));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn value_snippet(value: &Value) -> String {
    let mut rendered = value.to_string();
    if rendered.len() > 60 {
        rendered.truncate(60);
        rendered.push('…');
    }
    rendered
}

fn string_value(dataset: Dataset, index: usize, key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(IngestError::InvalidValue {
            dataset,
            index,
            key: key.to_owned(),
            value: value_snippet(other),
            detail: String::from("expected a string"),
        }),
    }
}

/// First present alias wins; every alias absent is a schema error naming all
/// of the keys tried.
pub(crate) fn require_str(
    dataset: Dataset,
    index: usize,
    row: &Row,
    aliases: &[&str],
) -> Result<String> {
    for key in aliases {
        if let Some(value) = row.get(*key) {
            if !value.is_null() {
                return string_value(dataset, index, key, value);
            }
        }
    }
    Err(IngestError::MissingKey {
        dataset,
        index,
        tried: aliases.join(", "),
    })
}

/// Like [`require_str`] but absent, null, and empty all collapse to `None`.
pub(crate) fn optional_str(row: &Row, aliases: &[&str]) -> Option<String> {
    for key in aliases {
        if let Some(Value::String(text)) = row.get(*key) {
            if !text.trim().is_empty() {
                return Some(text.clone());
            }
        }
    }
    None
}

/// The raw country-code field: present-but-empty is meaningful (it is the
/// documented exception shape), so only absence collapses to the default.
pub(crate) fn code_field(row: &Row, aliases: &[&str]) -> String {
    for key in aliases {
        if let Some(Value::String(text)) = row.get(*key) {
            return text.clone();
        }
    }
    String::new()
}

fn id_from_value(dataset: Dataset, index: usize, key: &str, value: &Value) -> Result<u32> {
    let parsed = match value {
        Value::Number(number) => number.as_u64().and_then(|id| u32::try_from(id).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| IngestError::InvalidValue {
        dataset,
        index,
        key: key.to_owned(),
        value: value_snippet(value),
        detail: String::from("expected a numeric id"),
    })
}

/// Numeric IDs arrive as JSON numbers in some vintages and as numeric
/// strings in others; both are accepted.
pub(crate) fn require_id(
    dataset: Dataset,
    index: usize,
    row: &Row,
    aliases: &[&str],
) -> Result<u32> {
    for key in aliases {
        if let Some(value) = row.get(*key) {
            if !value.is_null() {
                return id_from_value(dataset, index, key, value);
            }
        }
    }
    Err(IngestError::MissingKey {
        dataset,
        index,
        tried: aliases.join(", "),
    })
}

pub(crate) fn optional_id(
    dataset: Dataset,
    index: usize,
    row: &Row,
    key: &str,
) -> Result<Option<u32>> {
    match row.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => id_from_value(dataset, index, key, value).map(Some),
    }
}

pub(crate) fn require_url(dataset: Dataset, index: usize, row: &Row, key: &str) -> Result<Url> {
    let raw = require_str(dataset, index, row, &[key])?;
    parse_url(dataset, index, key, &raw)
}

pub(crate) fn optional_url(
    dataset: Dataset,
    index: usize,
    row: &Row,
    key: &str,
) -> Result<Option<Url>> {
    match row.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => parse_url(dataset, index, key, text).map(Some),
        Some(other) => Err(IngestError::InvalidValue {
            dataset,
            index,
            key: key.to_owned(),
            value: value_snippet(other),
            detail: String::from("expected a URL string"),
        }),
    }
}

fn parse_url(dataset: Dataset, index: usize, key: &str, raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|err| IngestError::InvalidValue {
        dataset,
        index,
        key: key.to_owned(),
        value: raw.to_owned(),
        detail: err.to_string(),
    })
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

pub(crate) fn parse_date(dataset: Dataset, index: usize, key: &str, raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| IngestError::InvalidValue {
            dataset,
            index,
            key: key.to_owned(),
            value: raw.to_owned(),
            detail: String::from("expected a date (YYYY-MM-DD or DD/MM/YYYY)"),
        })
}

pub(crate) fn optional_date(
    dataset: Dataset,
    index: usize,
    row: &Row,
    aliases: &[&str],
) -> Result<Option<NaiveDate>> {
    match optional_str(row, aliases) {
        Some(raw) => parse_date(dataset, index, aliases[0], &raw).map(Some),
        None => Ok(None),
    }
}

/// Parse an alpha-2 code field, labeling failures with the source key.
pub(crate) fn parse_code(dataset: Dataset, index: usize, key: &str, raw: &str) -> Result<Alpha2> {
    raw.parse().map_err(|err: whl_model::ModelError| IngestError::InvalidValue {
        dataset,
        index,
        key: key.to_owned(),
        value: raw.to_owned(),
        detail: err.to_string(),
    })
}

/// Enforce the snapshot's expected record count; a mismatch is fatal before
/// any join runs.
pub(crate) fn check_count(dataset: Dataset, expected: Option<usize>, actual: usize) -> Result<()> {
    match expected {
        Some(expected) if expected != actual => Err(IngestError::CountMismatch {
            dataset,
            expected,
            actual,
        }),
        _ => Ok(()),
    }
}
