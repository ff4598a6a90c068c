/// Upstream character IDs are small positive integers assigned by the API.
pub type CharacterId = u32;

/// Upstream episode IDs are small positive integers assigned by the API.
pub type EpisodeId = u32;
