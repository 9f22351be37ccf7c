use std::collections::BTreeMap;

use tracing::debug;
use whl_model::{SiteId, Wonder, WonderGroup, WonderId};

use crate::error::{Dataset, IngestError, Result};
use crate::manifest::SourceFormat;
use crate::rows::{Row, collect_rows, optional_id, optional_url, require_id, require_str, require_url};

/// Expected sizes of the wonders dataset for one snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct WonderExpectations {
    pub groups: Option<usize>,
    pub wonders: Option<usize>,
    pub finalists: Option<usize>,
}

/// Parse the New7Wonders groups.
///
/// Each group's entries carry local ranks; global IDs are composed from the
/// group offset here, then checked for global uniqueness and for landing in
/// the subset (wonders vs finalists) they were filed under. Groups keep
/// their source-file order; subsets sort by title.
pub fn parse_wonder_groups(
    payload: &str,
    format: SourceFormat,
    expected: &WonderExpectations,
) -> Result<Vec<WonderGroup>> {
    let dataset = Dataset::Wonders;
    if format != SourceFormat::JsonArray {
        return Err(IngestError::UnsupportedFormat { dataset, format });
    }
    let rows = collect_rows(dataset, payload, format)?;
    let mut groups = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let offset = require_id(dataset, index, row, &["id"])?;
        if offset == 0 || offset % 100 != 0 {
            return Err(IngestError::InvalidValue {
                dataset,
                index,
                key: String::from("id"),
                value: offset.to_string(),
                detail: String::from("group offset must be a positive multiple of 100"),
            });
        }
        let mut wonders = wonder_entries(dataset, index, row, "wonders", offset)?;
        let mut finalists = wonder_entries(dataset, index, row, "finalists", offset)?;
        wonders.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        finalists.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        groups.push(WonderGroup {
            id: offset,
            title: require_str(dataset, index, row, &["title"])?,
            url: require_url(dataset, index, row, "url")?,
            wonders,
            finalists,
        });
    }

    validate_subsets(&groups)?;
    validate_uniqueness(&groups)?;
    validate_counts(dataset, expected, &groups)?;
    debug!(
        groups = groups.len(),
        wonders = groups.iter().map(|g| g.wonders.len()).sum::<usize>(),
        finalists = groups.iter().map(|g| g.finalists.len()).sum::<usize>(),
        "parsed wonder groups"
    );
    Ok(groups)
}

fn wonder_entries(
    dataset: Dataset,
    group_index: usize,
    row: &Row,
    key: &str,
    offset: u32,
) -> Result<Vec<Wonder>> {
    let value = row.get(key).ok_or_else(|| IngestError::MissingKey {
        dataset,
        index: group_index,
        tried: key.to_owned(),
    })?;
    let entries = value.as_array().ok_or(IngestError::UnexpectedShape {
        dataset,
        expected: "an array of wonder entries",
    })?;
    let mut wonders = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.as_object().ok_or(IngestError::UnexpectedShape {
            dataset,
            expected: "an object per wonder entry",
        })?;
        let rank = require_id(dataset, group_index, entry, &["id"])?;
        if rank == 0 || rank >= 100 {
            return Err(IngestError::InvalidValue {
                dataset,
                index: group_index,
                key: String::from("id"),
                value: rank.to_string(),
                detail: String::from("local rank must be between 1 and 99"),
            });
        }
        wonders.push(Wonder {
            id: WonderId::compose(offset, rank),
            title: require_str(dataset, group_index, entry, &["title"])?,
            url: require_url(dataset, group_index, entry, "url")?,
            whs: optional_id(dataset, group_index, entry, "whs")?.map(SiteId),
            twhs: optional_id(dataset, group_index, entry, "twhs")?.map(SiteId),
            link: optional_url(dataset, group_index, entry, "link")?,
        });
    }
    Ok(wonders)
}

fn validate_subsets(groups: &[WonderGroup]) -> Result<()> {
    for group in groups {
        for wonder in &group.wonders {
            if !wonder.id.is_wonder() {
                return Err(IngestError::MisfiledWonder {
                    title: wonder.title.clone(),
                    id: wonder.id.0,
                    expected: "wonder",
                });
            }
        }
        for finalist in &group.finalists {
            if !finalist.id.is_finalist() {
                return Err(IngestError::MisfiledWonder {
                    title: finalist.title.clone(),
                    id: finalist.id.0,
                    expected: "finalist",
                });
            }
        }
    }
    Ok(())
}

fn validate_uniqueness(groups: &[WonderGroup]) -> Result<()> {
    let mut seen: BTreeMap<u32, usize> = BTreeMap::new();
    for group in groups {
        for wonder in group.wonders.iter().chain(&group.finalists) {
            *seen.entry(wonder.id.0).or_default() += 1;
        }
    }
    let duplicates: Vec<u32> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect();
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(IngestError::DuplicateWonderIds { ids: duplicates })
    }
}

fn validate_counts(
    dataset: Dataset,
    expected: &WonderExpectations,
    groups: &[WonderGroup],
) -> Result<()> {
    if let Some(count) = expected.groups {
        if groups.len() != count {
            return Err(IngestError::CountMismatch {
                dataset,
                expected: count,
                actual: groups.len(),
            });
        }
    }
    let wonders: usize = groups.iter().map(|group| group.wonders.len()).sum();
    if let Some(count) = expected.wonders {
        if wonders != count {
            return Err(IngestError::SubsetCount {
                dataset,
                subset: "wonders",
                expected: count,
                actual: wonders,
            });
        }
    }
    let finalists: usize = groups.iter().map(|group| group.finalists.len()).sum();
    if let Some(count) = expected.finalists {
        if finalists != count {
            return Err(IngestError::SubsetCount {
                dataset,
                subset: "finalists",
                expected: count,
                actual: finalists,
            });
        }
    }
    Ok(())
}
