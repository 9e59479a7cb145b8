//! Concrete persistence sinks
//!
//! Two implementations of [`CatalogPersistence`]:
//! - [`JsonFileStore`] writes the catalog and trash as two named JSON blobs
//!   in one directory, both rewritten on every save.
//! - [`MemoryStore`] keeps the snapshot in memory for tests and demos.
//!
//! The engine is single-threaded and cooperative, so the in-memory store
//! uses `Rc<RefCell<_>>` to let tests hold an inspection handle.

use aria_core::{CatalogPersistence, CatalogSeed, Result, Song};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Blob name for the active catalog
const SONGS_BLOB: &str = "songs.json";

/// Blob name for the trash
const TRASH_BLOB: &str = "trash.json";

/// File-backed persistence: two named JSON blobs in one directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir` (created on first save)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the blobs
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn read_blob(&self, name: &str) -> Result<Vec<Song>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl CatalogPersistence for JsonFileStore {
    fn save(&mut self, songs: &[Song], trash: &[Song]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(SONGS_BLOB), serde_json::to_string_pretty(songs)?)?;
        fs::write(self.dir.join(TRASH_BLOB), serde_json::to_string_pretty(trash)?)?;
        Ok(())
    }

    fn load(&self) -> Result<CatalogSeed> {
        Ok(CatalogSeed::new(
            self.read_blob(SONGS_BLOB)?,
            self.read_blob(TRASH_BLOB)?,
        ))
    }
}

/// In-memory persistence for tests and demos
///
/// [`MemoryStore::handle`] returns a shared view of the last-saved snapshot
/// so tests can assert on write-through behavior after the store has been
/// boxed into a `CatalogStore`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<CatalogSeed>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a seed
    pub fn with_seed(seed: CatalogSeed) -> Self {
        Self {
            slot: Rc::new(RefCell::new(seed)),
        }
    }

    /// Shared handle onto the stored snapshot
    pub fn handle(&self) -> Rc<RefCell<CatalogSeed>> {
        Rc::clone(&self.slot)
    }
}

impl CatalogPersistence for MemoryStore {
    fn save(&mut self, songs: &[Song], trash: &[Song]) -> Result<()> {
        *self.slot.borrow_mut() = CatalogSeed::new(songs.to_vec(), trash.to_vec());
        Ok(())
    }

    fn load(&self) -> Result<CatalogSeed> {
        Ok(self.slot.borrow().clone())
    }
}
