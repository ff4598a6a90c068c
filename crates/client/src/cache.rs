//! In-memory character cache.
//!
//! Memoizes single-character lookups for the lifetime of the client:
//! unbounded, append-only, no eviction, no TTL and no negative caching.
//! The upstream dataset is effectively static for a session, which is the
//! only reason this is sound.

use std::collections::HashMap;

use tokio::sync::RwLock;

use rickwiki_core::{Character, CharacterId};

/// Session-lifetime memo of decoded characters, keyed by ID.
pub struct CharacterCache {
    entries: RwLock<HashMap<CharacterId, Character>>,
}

impl CharacterCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a previously decoded character.
    pub async fn get(&self, id: CharacterId) -> Option<Character> {
        self.entries.read().await.get(&id).cloned()
    }

    /// Insert a character unless one is already present for this ID.
    ///
    /// Takes the write lock once around the lookup-and-insert, so two
    /// concurrent fetches of the same ID cannot lose a write: the first
    /// insert wins and later ones are discarded.
    pub async fn insert_if_absent(&self, id: CharacterId, character: Character) {
        self.entries.write().await.entry(id).or_insert(character);
    }

    /// Number of cached characters.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// `true` if nothing has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for CharacterCache {
    fn default() -> Self {
        Self::new()
    }
}
