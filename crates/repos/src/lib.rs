//! Repository facades over the API client.
//!
//! Each repository narrows [`rickwiki_client::RickAndMortyApi`] to exactly
//! the operations one resource family's screens consume. They add no
//! logic, caching or retries of their own; they are the seam the UI layer
//! depends on instead of the full client surface.

pub mod character_repo;
pub mod episodes_repo;

pub use character_repo::CharacterRepository;
pub use episodes_repo::EpisodesRepository;
