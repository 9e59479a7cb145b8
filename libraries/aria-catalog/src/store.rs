//! Catalog store - active and trash collections
//!
//! Coordinates id assignment, the soft-delete lifecycle, write-through
//! persistence, and change notifications.

use crate::{events::CatalogEvent, id::IdGenerator, view, view::SortOrder};
use aria_core::{
    AriaError, CatalogPersistence, CatalogSeed, CreateSong, Result, Scope, Song, SongId, SongPatch,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Central catalog management
///
/// Owns both ordered collections:
/// - Catalog: active songs, new entries prepended (most-recent-first)
/// - Trash: soft-deleted songs, appended in deletion order
///
/// Every song id is present in exactly one of the two collections. Every
/// mutating operation writes both collections through the persistence sink
/// as one unit and queues a [`CatalogEvent`] for the presentation layer.
pub struct CatalogStore {
    songs: Vec<Song>,
    trash: Vec<Song>,
    ids: IdGenerator,
    persistence: Box<dyn CatalogPersistence>,
    pending_events: Vec<CatalogEvent>,
}

impl CatalogStore {
    /// Create an empty store backed by the given persistence sink
    pub fn new(persistence: Box<dyn CatalogPersistence>) -> Self {
        Self {
            songs: Vec::new(),
            trash: Vec::new(),
            ids: IdGenerator::new(),
            persistence,
            pending_events: Vec::new(),
        }
    }

    /// Build a store from a seed snapshot
    ///
    /// Seed ids feed the generator watermark so later adds cannot collide.
    pub fn from_seed(seed: CatalogSeed, persistence: Box<dyn CatalogPersistence>) -> Self {
        let mut store = Self::new(persistence);
        for song in seed.songs.iter().chain(seed.trash.iter()) {
            store.ids.observe(song.id);
        }
        store.songs = seed.songs;
        store.trash = seed.trash;
        store
    }

    /// Load the persisted snapshot, degrading to an empty store on failure
    ///
    /// A failed load is logged and non-fatal; the engine stays usable with
    /// an empty catalog.
    pub fn load_or_default(persistence: Box<dyn CatalogPersistence>) -> Self {
        match persistence.load() {
            Ok(seed) => {
                debug!(
                    songs = seed.songs.len(),
                    trash = seed.trash.len(),
                    "catalog loaded"
                );
                Self::from_seed(seed, persistence)
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed, starting empty");
                Self::new(persistence)
            }
        }
    }

    // ===== Lifecycle =====

    /// Add a new song to the catalog
    ///
    /// Assigns a fresh id, prepends the record (most-recent-first), and
    /// writes through. The caller supplies the creation date; the engine
    /// never reads the wall clock.
    pub fn add(&mut self, record: CreateSong, date_created: NaiveDate) -> SongId {
        let id = self.ids.next();
        self.songs.insert(0, record.into_song(id, date_created));
        self.commit();
        id
    }

    /// Merge a metadata patch into an active song
    pub fn update(&mut self, id: SongId, patch: &SongPatch) -> Result<()> {
        let song = self
            .songs
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AriaError::not_found(Scope::Catalog, id))?;
        patch.apply(song);
        self.commit();
        Ok(())
    }

    /// Soft-delete: move an active song to the end of the trash
    ///
    /// Trash stays chronological by deletion order, so this appends.
    pub fn move_to_trash(&mut self, id: SongId) -> Result<()> {
        let index = self
            .songs
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AriaError::not_found(Scope::Catalog, id))?;
        let song = self.songs.remove(index);
        self.trash.push(song);
        self.commit();
        Ok(())
    }

    /// Move a trashed song back into the catalog (appended)
    pub fn restore(&mut self, id: SongId) -> Result<()> {
        let index = self
            .trash
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AriaError::not_found(Scope::Trash, id))?;
        let song = self.trash.remove(index);
        self.songs.push(song);
        self.commit();
        Ok(())
    }

    /// Permanently remove a trashed song. Irreversible.
    pub fn purge(&mut self, id: SongId) -> Result<()> {
        let index = self
            .trash
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AriaError::not_found(Scope::Trash, id))?;
        self.trash.remove(index);
        self.commit();
        Ok(())
    }

    // ===== Queries =====

    /// Look up a song in the given scope
    pub fn find(&self, id: SongId, scope: Scope) -> Option<&Song> {
        let collection = match scope {
            Scope::Catalog => &self.songs,
            Scope::Trash => &self.trash,
        };
        collection.iter().find(|s| s.id == id)
    }

    /// Active songs in stored order (most-recent-first)
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Trashed songs in deletion order
    pub fn trash(&self) -> &[Song] {
        &self.trash
    }

    /// Number of active songs
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Number of trashed songs
    pub fn trash_count(&self) -> usize {
        self.trash.len()
    }

    /// Sorted view of the active catalog (stored order untouched)
    pub fn sorted_songs(&self, order: SortOrder) -> Vec<&Song> {
        view::sorted(&self.songs, order)
    }

    /// Search the active catalog by title, creator, or kind
    pub fn search(&self, query: &str) -> Vec<&Song> {
        view::search(&self.songs, query)
    }

    // ===== Events =====

    /// Drain queued catalog events
    pub fn take_events(&mut self) -> Vec<CatalogEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are events waiting
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Write-through plus change notification, after every mutation
    ///
    /// Persistence is best-effort: a failed save degrades to "changes not
    /// yet durable" and never rolls back the in-memory mutation.
    fn commit(&mut self) {
        if let Err(err) = self.persistence.save(&self.songs, &self.trash) {
            warn!(error = %err, "catalog write-through failed, changes not yet durable");
        }
        self.pending_events.push(CatalogEvent::Changed {
            song_count: self.songs.len(),
            trash_count: self.trash.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use aria_core::SongKind;

    fn create_test_record(title: &str) -> CreateSong {
        CreateSong {
            title: title.to_string(),
            creator: "Test Creator".to_string(),
            ai_version: "Suno AI v3.5".to_string(),
            duration: "3:00".to_string(),
            kind: SongKind::Upload,
            prompt: "test prompt".to_string(),
            description: String::new(),
            lyrics: String::new(),
            artwork: String::new(),
            suno_link: None,
            cdn_link: "https://cdn1.suno.ai/test.mp3".to_string(),
            original_link: None,
        }
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn add_prepends_most_recent_first() {
        let mut store = CatalogStore::new(Box::new(MemoryStore::new()));
        store.add(create_test_record("First"), test_date());
        store.add(create_test_record("Second"), test_date());

        assert_eq!(store.songs()[0].title, "Second");
        assert_eq!(store.songs()[1].title, "First");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = CatalogStore::new(Box::new(MemoryStore::new()));
        let patch = SongPatch {
            title: Some("New Title".to_string()),
            ..Default::default()
        };

        let err = store.update(SongId::new(99), &patch).unwrap_err();
        assert!(matches!(
            err,
            AriaError::NotFound {
                scope: Scope::Catalog,
                ..
            }
        ));
    }

    #[test]
    fn trashed_song_is_not_findable_in_catalog() {
        let mut store = CatalogStore::new(Box::new(MemoryStore::new()));
        let id = store.add(create_test_record("Song"), test_date());

        store.move_to_trash(id).unwrap();
        assert!(store.find(id, Scope::Catalog).is_none());
        assert!(store.find(id, Scope::Trash).is_some());
    }

    #[test]
    fn restore_from_empty_trash_is_not_found() {
        let mut store = CatalogStore::new(Box::new(MemoryStore::new()));
        let id = store.add(create_test_record("Song"), test_date());

        let err = store.restore(id).unwrap_err();
        assert!(matches!(
            err,
            AriaError::NotFound {
                scope: Scope::Trash,
                ..
            }
        ));
    }

    #[test]
    fn every_mutation_queues_a_changed_event() {
        let mut store = CatalogStore::new(Box::new(MemoryStore::new()));
        let id = store.add(create_test_record("Song"), test_date());
        store.move_to_trash(id).unwrap();
        store.restore(id).unwrap();

        let events = store.take_events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[2],
            CatalogEvent::Changed {
                song_count: 1,
                trash_count: 0
            }
        );
        assert!(!store.has_pending_events());
    }

    #[test]
    fn seed_ids_feed_the_generator_watermark() {
        let seed = crate::seed::sample_catalog();
        let max_seed_id = seed.songs.iter().map(|s| s.id.value()).max().unwrap();

        let mut store = CatalogStore::from_seed(seed, Box::new(MemoryStore::new()));
        let fresh = store.add(create_test_record("Fresh"), test_date());
        assert!(fresh.value() > max_seed_id);
    }
}
