//! HTTP client for the upstream REST API.
//!
//! [`RickAndMortyApi`] wraps the read-only API with [`reqwest`]:
//! single-entity fetches, filtered page fetches, batched multi-ID fetches
//! and the sequential cross-page aggregation loops. Single-character
//! lookups are memoized in a [`CharacterCache`].
//!
//! All operations are async and issue their page requests strictly
//! sequentially; dropping the caller's future between awaits stops an
//! aggregation loop without delivering a partial value.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

use rickwiki_core::{Character, CharacterId, CharacterPage, Episode, EpisodeId, EpisodePage};

use crate::cache::CharacterCache;
use crate::error::ApiError;
use crate::operation::ApiOperation;
use crate::wire::{WireCharacter, WireCharacterPage, WireEpisode, WireEpisodePage};

/// Public API root used when no override is given.
const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// HTTP request timeout for a single round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the upstream API.
///
/// Owns the transport configuration and the character cache. All
/// operations take `&self`, so a single instance can be shared behind an
/// `Arc` across callers.
pub struct RickAndMortyApi {
    client: reqwest::Client,
    base_url: String,
    cache: CharacterCache,
}

impl RickAndMortyApi {
    /// Create a client against the public API root.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API root (integration tests point
    /// this at an in-process mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across clients).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            cache: CharacterCache::new(),
        }
    }

    // ---- characters ----

    /// Fetch a single character by ID, memoized.
    ///
    /// A cache hit returns without a network call. On a successful fetch
    /// the decoded character is stored for next time; failures leave the
    /// cache untouched.
    pub async fn get_character(&self, id: CharacterId) -> ApiOperation<Character> {
        if let Some(character) = self.cache.get(id).await {
            tracing::debug!(id, "character served from cache");
            return ApiOperation::Success(character);
        }
        self.fetch_character(id).await.into()
    }

    /// Fetch one page of the character collection.
    ///
    /// `filters` is merged into the query string alongside `page`; the
    /// upstream accepts arbitrary filter parameters (`name`, `status`,
    /// `species`, ...). Does not touch the character cache.
    pub async fn get_character_page(
        &self,
        page: u32,
        filters: &HashMap<String, String>,
    ) -> ApiOperation<CharacterPage> {
        self.fetch_character_page(page, filters).await.into()
    }

    /// Fetch every character whose name matches `query`, across all pages.
    ///
    /// Fetches page 1 with `name=query`, reads the total page count, then
    /// requests pages 2..=N strictly sequentially, accumulating characters
    /// in page order. The first failing page aborts the loop and is
    /// returned verbatim as the overall failure; characters accumulated
    /// from earlier pages are discarded.
    pub async fn search_all_characters_by_name(
        &self,
        query: &str,
    ) -> ApiOperation<Vec<Character>> {
        let filters = HashMap::from([("name".to_string(), query.to_string())]);

        let first = match self.fetch_character_page(1, &filters).await {
            Ok(page) => page,
            Err(error) => return ApiOperation::Failure(error),
        };

        let total_pages = first.info.pages;
        let mut characters = first.characters;
        for page in 2..=total_pages {
            match self.fetch_character_page(page, &filters).await {
                Ok(next) => characters.extend(next.characters),
                Err(error) => {
                    tracing::warn!(
                        page,
                        total_pages,
                        error = %error,
                        "aborting character search on failed page"
                    );
                    return ApiOperation::Failure(error);
                }
            }
        }

        tracing::debug!(total_pages, count = characters.len(), "character search complete");
        ApiOperation::Success(characters)
    }

    // ---- episodes ----

    /// Fetch a single episode by ID. Not cached.
    pub async fn get_episode(&self, id: EpisodeId) -> ApiOperation<Episode> {
        self.fetch_episode(id).await.into()
    }

    /// Fetch a batch of episodes in one round trip.
    ///
    /// A single ID delegates to [`get_episode`](Self::get_episode) and
    /// wraps the result in a one-element list; multiple IDs are joined
    /// with commas into one batched request regardless of count.
    ///
    /// # Panics
    ///
    /// Panics if `ids` is empty.
    pub async fn get_episodes(&self, ids: &[EpisodeId]) -> ApiOperation<Vec<Episode>> {
        assert!(!ids.is_empty(), "get_episodes requires at least one episode id");

        if let [id] = ids {
            return self.get_episode(*id).await.map(|episode| vec![episode]);
        }
        self.fetch_episode_batch(ids).await.into()
    }

    /// Fetch one page of the episode collection.
    pub async fn get_episodes_by_page(&self, page: u32) -> ApiOperation<EpisodePage> {
        self.fetch_episode_page(page).await.into()
    }

    /// Fetch the entire episode collection, across all pages.
    ///
    /// Same sequential loop and first-failure short-circuit as
    /// [`search_all_characters_by_name`](Self::search_all_characters_by_name).
    pub async fn get_all_episodes(&self) -> ApiOperation<Vec<Episode>> {
        let first = match self.fetch_episode_page(1).await {
            Ok(page) => page,
            Err(error) => return ApiOperation::Failure(error),
        };

        let total_pages = first.info.pages;
        let mut episodes = first.episodes;
        for page in 2..=total_pages {
            match self.fetch_episode_page(page).await {
                Ok(next) => episodes.extend(next.episodes),
                Err(error) => {
                    tracing::warn!(
                        page,
                        total_pages,
                        error = %error,
                        "aborting episode listing on failed page"
                    );
                    return ApiOperation::Failure(error);
                }
            }
        }

        ApiOperation::Success(episodes)
    }

    // ---- private fetch helpers ----

    async fn fetch_character(&self, id: CharacterId) -> Result<Character, ApiError> {
        let wire: WireCharacter = self.get_json(&format!("character/{id}"), &[]).await?;
        let character = wire.into_domain()?;
        self.cache.insert_if_absent(id, character.clone()).await;
        Ok(character)
    }

    async fn fetch_character_page(
        &self,
        page: u32,
        filters: &HashMap<String, String>,
    ) -> Result<CharacterPage, ApiError> {
        let mut query: Vec<(&str, String)> = vec![("page", page.to_string())];
        query.extend(filters.iter().map(|(key, value)| (key.as_str(), value.clone())));
        let wire: WireCharacterPage = self.get_json("character", &query).await?;
        Ok(wire.into_domain()?)
    }

    async fn fetch_episode(&self, id: EpisodeId) -> Result<Episode, ApiError> {
        let wire: WireEpisode = self.get_json(&format!("episode/{id}"), &[]).await?;
        Ok(wire.into_domain()?)
    }

    async fn fetch_episode_batch(&self, ids: &[EpisodeId]) -> Result<Vec<Episode>, ApiError> {
        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let wire: Vec<WireEpisode> = self.get_json(&format!("episode/{joined}"), &[]).await?;
        let episodes = wire
            .into_iter()
            .map(WireEpisode::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(episodes)
    }

    async fn fetch_episode_page(&self, page: u32) -> Result<EpisodePage, ApiError> {
        let wire: WireEpisodePage = self
            .get_json("episode", &[("page", page.to_string())])
            .await?;
        Ok(wire.into_domain()?)
    }

    // ---- transport helpers ----

    /// Issue a GET against `{base_url}/{path}` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or [`ApiError::Status`] carrying the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl Default for RickAndMortyApi {
    fn default() -> Self {
        Self::new()
    }
}
