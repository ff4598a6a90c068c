//! Repository for the character resource family.

use std::collections::HashMap;

use rickwiki_client::{ApiOperation, RickAndMortyApi};
use rickwiki_core::{Character, CharacterId, CharacterPage};

/// Character operations consumed by the home and detail screens.
pub struct CharacterRepository;

impl CharacterRepository {
    /// Fetch a single character by ID (memoized by the client).
    pub async fn fetch_character(
        api: &RickAndMortyApi,
        id: CharacterId,
    ) -> ApiOperation<Character> {
        api.get_character(id).await
    }

    /// Fetch one page of characters, optionally filtered.
    pub async fn fetch_character_page(
        api: &RickAndMortyApi,
        page: u32,
        filters: &HashMap<String, String>,
    ) -> ApiOperation<CharacterPage> {
        api.get_character_page(page, filters).await
    }

    /// Fetch every character matching a name, across all pages.
    pub async fn fetch_all_characters_by_name(
        api: &RickAndMortyApi,
        query: &str,
    ) -> ApiOperation<Vec<Character>> {
        api.search_all_characters_by_name(query).await
    }
}
