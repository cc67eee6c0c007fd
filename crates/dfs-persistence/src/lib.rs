//! Persistent storage for saved lineups and the player pool cache.
//!
//! # Storage
//!
//! - Saved lineups live in one JSON document behind [`LineupRepository`].
//!   [`JsonFileRepository`] writes it atomically (temp file + rename);
//!   [`MemoryRepository`] keeps it in process.
//! - The last parsed player pool is cached as JSON by [`JsonPlayerCache`],
//!   fingerprinted with the SHA-256 of its salary file.
//!
//! # Documents
//!
//! [`SavedLineup`] accepts both the current shape (explicit `slots` with
//! `isCaptain`) and the legacy players-only shape.

mod cache;
mod error;
mod io;
mod repository;
mod types;

pub use cache::{JsonPlayerCache, PlayerCache, PlayerCacheMetadata, PlayerCacheStore};
pub use error::{PersistenceError, Result};
pub use io::{compute_file_hash, verify_file_hash};
pub use repository::{JsonFileRepository, LineupDocument, LineupRepository, MemoryRepository};
pub use types::{LineupId, SavedLineup, StoredLineup, round_ownership};
