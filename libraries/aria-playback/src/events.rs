//! Playback events
//!
//! Event-based communication for UI synchronization. The session queues
//! events at key points (state changes, track changes, periodic position
//! samples, volume/settings changes, transport errors) and the host drains
//! them with `take_events`. The engine never renders.

use crate::types::{RepeatMode, SessionState};
use aria_core::SongId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new session state
        state: SessionState,
    },

    /// A different song became current
    TrackChanged {
        /// Id of the new current song
        song_id: SongId,
        /// Id of the previous song (if any)
        previous_song_id: Option<SongId>,
    },

    /// Periodic position sample (every ~100 ms while playing)
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration, once known
        duration_ms: Option<u64>,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// Stored volume level (0.0-1.0)
        level: f32,
        /// Whether output is muted
        is_muted: bool,
    },

    /// Shuffle flag flipped
    ShuffleChanged {
        /// The new shuffle flag
        shuffled: bool,
    },

    /// Repeat mode advanced
    RepeatChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },

    /// The transport failed to load or play a song
    Error {
        /// Id of the failing song
        song_id: SongId,
        /// Human-readable failure description
        message: String,
    },
}
