//! Catalog events
//!
//! Emitted after every mutation so the presentation layer can refresh
//! counts and listings without the engine touching any rendering.

use serde::{Deserialize, Serialize};

/// Events emitted by the catalog store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    /// One or both collections changed
    Changed {
        /// Number of active songs after the mutation
        song_count: usize,
        /// Number of trashed songs after the mutation
        trash_count: usize,
    },
}
