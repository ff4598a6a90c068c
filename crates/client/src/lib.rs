//! Client library for the Rick and Morty REST API.
//!
//! Typed access to the read-only upstream API
//! (<https://rickandmortyapi.com/api>): wire-format records and their
//! domain decoders, the memoizing character cache, the [`ApiOperation`]
//! result carrier, and the [`RickAndMortyApi`] client with its cross-page
//! aggregation loops.
//!
//! Every public client operation resolves to an [`ApiOperation`]; transport
//! and decode failures are folded into [`ApiOperation::Failure`] at the
//! operation boundary instead of surfacing as `Err` or a panic.

pub mod api;
pub mod cache;
pub mod error;
pub mod operation;
pub mod wire;

pub use api::RickAndMortyApi;
pub use cache::CharacterCache;
pub use error::{ApiError, DecodeError};
pub use operation::ApiOperation;
