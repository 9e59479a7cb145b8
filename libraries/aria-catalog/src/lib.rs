//! Aria Player - Catalog Management
//!
//! Owns the two ordered song collections (active catalog and trash) and
//! their lifecycle:
//! - Add (prepend, most-recent-first) and metadata edits
//! - Soft delete to trash, restore, and permanent purge
//! - Monotonic id assignment (never wall-clock derived)
//! - Sort and search views that never reorder the stored collections
//! - Write-through persistence after every mutation
//! - Catalog-changed events for the presentation layer
//!
//! The engine never renders; collaborators drain [`CatalogEvent`]s via
//! [`CatalogStore::take_events`] and re-read the collections.
//!
//! # Example
//!
//! ```rust
//! use aria_catalog::{CatalogStore, MemoryStore};
//! use aria_core::{CreateSong, Scope, SongKind};
//! use chrono::NaiveDate;
//!
//! let mut store = CatalogStore::new(Box::new(MemoryStore::new()));
//!
//! let record = CreateSong {
//!     title: "Electric Dreams".to_string(),
//!     creator: "AI Composer".to_string(),
//!     ai_version: "Suno AI v3.5".to_string(),
//!     duration: "2:35".to_string(),
//!     kind: SongKind::Upload,
//!     prompt: "Electronic music with futuristic synths".to_string(),
//!     description: String::new(),
//!     lyrics: String::new(),
//!     artwork: "https://picsum.photos/seed/electric/400/400".to_string(),
//!     suno_link: None,
//!     cdn_link: "https://cdn1.suno.ai/example.mp3".to_string(),
//!     original_link: None,
//! };
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let id = store.add(record, date);
//!
//! store.move_to_trash(id).unwrap();
//! assert!(store.find(id, Scope::Trash).is_some());
//!
//! store.restore(id).unwrap();
//! assert!(store.find(id, Scope::Catalog).is_some());
//! ```

mod events;
mod id;
mod persist;
mod seed;
mod store;
mod view;

// Public exports
pub use events::CatalogEvent;
pub use id::IdGenerator;
pub use persist::{JsonFileStore, MemoryStore};
pub use seed::sample_catalog;
pub use store::CatalogStore;
pub use view::{search, sorted, SortOrder};
