//! Page envelopes for the paginated collections.
//!
//! A page holds one slice of a collection in upstream order plus the
//! pagination metadata needed to drive an aggregation loop. Envelopes are
//! built fresh per fetch and never mutated; accumulating several pages
//! into one list is the caller's business.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::episode::Episode;

/// Pagination metadata attached to every collection response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of items across all pages.
    pub count: u32,
    /// Total number of pages.
    pub pages: u32,
    /// Upstream URL of the next page, if any.
    pub next: Option<String>,
    /// Upstream URL of the previous page, if any.
    pub prev: Option<String>,
}

/// One page of the character collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub characters: Vec<Character>,
}

/// One page of the episode collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodePage {
    pub info: PageInfo,
    pub episodes: Vec<Episode>,
}
