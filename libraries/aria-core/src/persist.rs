//! Persistence boundary for the song catalog
//!
//! The catalog engine writes through to a [`CatalogPersistence`] sink after
//! every mutation and reads a [`CatalogSeed`] once at startup. Concrete
//! stores (file-backed, in-memory) live in `aria-catalog`.

use crate::error::Result;
use crate::types::Song;
use serde::{Deserialize, Serialize};

/// Snapshot of both catalog collections
///
/// This is the flat structural schema of the seed source and of the
/// persisted blobs: the active catalog plus the trash, each in stored order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSeed {
    /// Active songs, most-recent-first
    #[serde(default)]
    pub songs: Vec<Song>,

    /// Soft-deleted songs, in deletion order
    #[serde(default)]
    pub trash: Vec<Song>,
}

impl CatalogSeed {
    /// Create a seed from both collections
    pub fn new(songs: Vec<Song>, trash: Vec<Song>) -> Self {
        Self { songs, trash }
    }

    /// Check whether both collections are empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty() && self.trash.is_empty()
    }
}

/// Write-through persistence sink for the catalog
///
/// `save` rewrites both collections together; there is no partial write.
/// Implementations are best-effort: the store logs a failed save and keeps
/// the in-memory mutation.
pub trait CatalogPersistence {
    /// Persist both collections as one unit
    fn save(&mut self, songs: &[Song], trash: &[Song]) -> Result<()>;

    /// Read the persisted snapshot (used once at startup)
    fn load(&self) -> Result<CatalogSeed>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_is_empty() {
        let seed = CatalogSeed::default();
        assert!(seed.is_empty());
        assert!(seed.songs.is_empty());
        assert!(seed.trash.is_empty());
    }

    #[test]
    fn seed_tolerates_missing_collections() {
        // A blob written before the trash feature existed
        let seed: CatalogSeed = serde_json::from_str(r#"{"songs": []}"#).unwrap();
        assert!(seed.trash.is_empty());
    }
}
