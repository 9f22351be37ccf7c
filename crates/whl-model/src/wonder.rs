use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::{SiteId, WonderId};

/// One New7Wonders entry, wonder or finalist depending on its composed ID.
///
/// `whs`/`twhs` cross-reference the World Heritage lists where the wonder is
/// also an inscribed or tentative site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wonder {
    pub id: WonderId,
    pub title: String,
    pub url: Url,
    pub whs: Option<SiteId>,
    pub twhs: Option<SiteId>,
    pub link: Option<Url>,
}

/// One New7Wonders campaign (Ancient, New7Wonders, Nature), with its wonders
/// and finalists in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WonderGroup {
    /// Offset combined with local ranks to form global wonder IDs; a
    /// multiple of 100.
    pub id: u32,
    pub title: String,
    pub url: Url,
    pub wonders: Vec<Wonder>,
    pub finalists: Vec<Wonder>,
}

impl WonderGroup {
    pub fn total(&self) -> usize {
        self.wonders.len() + self.finalists.len()
    }
}
