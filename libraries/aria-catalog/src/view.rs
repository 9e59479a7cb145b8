//! Sort and search views over the active catalog
//!
//! Views borrow the stored collection and never reorder it; the stored
//! order stays insertion order (most-recent-first for adds).

use aria_core::Song;
use serde::{Deserialize, Serialize};

/// Display sort order for the catalog listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recent creation date first (default listing)
    #[default]
    NewestFirst,
    /// Oldest creation date first
    OldestFirst,
    /// Title ascending, case-insensitive
    TitleAsc,
    /// Title descending, case-insensitive
    TitleDesc,
}

/// Sorted view of the catalog
pub fn sorted(songs: &[Song], order: SortOrder) -> Vec<&Song> {
    let mut view: Vec<&Song> = songs.iter().collect();
    match order {
        SortOrder::NewestFirst => view.sort_by(|a, b| b.date_created.cmp(&a.date_created)),
        SortOrder::OldestFirst => view.sort_by(|a, b| a.date_created.cmp(&b.date_created)),
        SortOrder::TitleAsc => {
            view.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortOrder::TitleDesc => {
            view.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
        }
    }
    view
}

/// Case-insensitive substring search over title, creator, and kind
///
/// An empty query matches everything, so the caller can feed the search box
/// value straight through.
pub fn search<'a>(songs: &'a [Song], query: &str) -> Vec<&'a Song> {
    if query.is_empty() {
        return songs.iter().collect();
    }

    let needle = query.to_lowercase();
    songs
        .iter()
        .filter(|song| {
            song.title.to_lowercase().contains(&needle)
                || song.creator.to_lowercase().contains(&needle)
                || song.kind.as_str().contains(&needle)
        })
        .collect()
}
