/// ID types for Aria Player entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Song identifier
///
/// An opaque integer handle, unique across the union of catalog and trash.
/// Ids are issued by the catalog's generator, never derived from the wall
/// clock, so rapid successive adds cannot collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(i64);

impl SongId {
    /// Create a song ID from a raw value
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SongId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_id_round_trip() {
        let id = SongId::new(1234);
        assert_eq!(id.value(), 1234);
        assert_eq!(format!("{}", id), "1234");
    }

    #[test]
    fn song_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&SongId::new(7)).unwrap();
        assert_eq!(json, "7");

        let back: SongId = serde_json::from_str("7").unwrap();
        assert_eq!(back, SongId::new(7));
    }
}
