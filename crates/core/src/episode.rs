//! Episode entity model.

use serde::{Deserialize, Serialize};

use crate::types::{CharacterId, EpisodeId};

/// An episode entity.
///
/// `season_number` and `episode_number` are decoded from the packed
/// `S##E##` code the upstream sends in its `episode` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EpisodeId,
    pub name: String,
    pub season_number: u32,
    pub episode_number: u32,
    /// Upstream air date (e.g. "December 2, 2013"), kept as an opaque string.
    pub air_date: String,
    /// Characters appearing in this episode, in upstream order.
    pub character_ids: Vec<CharacterId>,
}
