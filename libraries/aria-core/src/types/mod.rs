//! Domain types for Aria Player

mod ids;
mod song;

pub use ids::SongId;
pub use song::{CreateSong, Song, SongKind, SongPatch};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two catalog collections an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The active, non-deleted collection
    Catalog,
    /// The soft-deleted collection awaiting restore or purge
    Trash,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Catalog => write!(f, "catalog"),
            Scope::Trash => write!(f, "trash"),
        }
    }
}
