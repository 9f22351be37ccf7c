use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ModelError;

/// ISO 3166-1 alpha-2 country code, stored uppercase.
///
/// This is the primary join key across every dataset: site rows carry these
/// codes in free-text fields, members and country files key on them, and the
/// report walks countries by them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alpha2(String);

impl Alpha2 {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Alpha2 {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.len() == 2 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(ModelError::InvalidCountryCode { value })
        }
    }
}

impl FromStr for Alpha2 {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<Alpha2> for String {
    fn from(code: Alpha2) -> Self {
        code.0
    }
}

impl fmt::Display for Alpha2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ISO 3166-1 country, loaded once and held immutably.
///
/// `unofficial` and `wiki_entry` carry the Kosovo special case: the source
/// file lists it without ISO standing and with a different link field than
/// every other country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: Alpha2,
    pub alpha3: String,
    pub name: String,
    pub official_name: String,
    pub numeric: String,
    pub wiki_url: Option<Url>,
    #[serde(default)]
    pub unofficial: bool,
    pub wiki_entry: Option<Url>,
}

/// A UNESCO state party or associate. Only countries present in the member
/// set appear in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub code: Alpha2,
    pub name: String,
    pub joined: NaiveDate,
    pub region: String,
}

/// Optional per-country reference link. Sparse: most countries have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryFile {
    pub code: Alpha2,
    pub file: Option<Url>,
    pub name: Option<String>,
}

/// The one documented data anomaly: a single inscribed site ships with an
/// empty country-code field and is attributed to a specific country by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanAttribution {
    pub site: crate::ids::SiteId,
    pub country: Alpha2,
}

impl Default for OrphanAttribution {
    /// Site 148 (Old City of Jerusalem and its Walls) carries no country
    /// code in the source export and is listed under Israel.
    fn default() -> Self {
        Self {
            site: crate::ids::SiteId(148),
            country: Alpha2(String::from("IL")),
        }
    }
}
