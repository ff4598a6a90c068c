//! Character entity model.

use serde::{Deserialize, Serialize};

use crate::types::{CharacterId, EpisodeId};

/// Life status of a character.
///
/// Anything the upstream reports outside the known literals decodes to
/// `Unknown` rather than failing the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    /// Human-readable label for list and detail views.
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Gender of a character.
///
/// `Unknown` here is independent of [`CharacterStatus::Unknown`]: a
/// character can have a known gender and an unknown status, or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterGender {
    Male,
    Female,
    Genderless,
    Unknown,
}

impl CharacterGender {
    /// Human-readable label for list and detail views.
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterGender::Male => "Male",
            CharacterGender::Female => "Female",
            CharacterGender::Genderless => "No Gender",
            CharacterGender::Unknown => "Not specified",
        }
    }
}

impl std::fmt::Display for CharacterGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named place with a reference URL, used for a character's origin and
/// last known location. Both parts may be empty when the upstream does not
/// know the place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

/// A character entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    /// Free-form subtype ("Parasite", "Superhuman", ...); empty when the
    /// upstream has none.
    pub kind: String,
    pub gender: CharacterGender,
    pub origin: LocationRef,
    pub location: LocationRef,
    pub image_url: String,
    /// Episodes this character appears in, in upstream order.
    pub episode_ids: Vec<EpisodeId>,
    /// Upstream creation timestamp, kept as an opaque string.
    pub created: String,
}
