//! Repository for the episode resource family.

use rickwiki_client::{ApiOperation, RickAndMortyApi};
use rickwiki_core::{Episode, EpisodeId};

/// Episode operations consumed by the episode screens.
pub struct EpisodesRepository;

impl EpisodesRepository {
    /// Fetch the entire episode collection, across all pages.
    pub async fn fetch_all_episodes(api: &RickAndMortyApi) -> ApiOperation<Vec<Episode>> {
        api.get_all_episodes().await
    }

    /// Fetch the episodes a character appears in, batched into one round
    /// trip when more than one ID is given.
    ///
    /// # Panics
    ///
    /// Panics if `ids` is empty, matching the client contract.
    pub async fn fetch_episodes(
        api: &RickAndMortyApi,
        ids: &[EpisodeId],
    ) -> ApiOperation<Vec<Episode>> {
        api.get_episodes(ids).await
    }
}
