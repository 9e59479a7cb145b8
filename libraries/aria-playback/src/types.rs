//! Core types for the playback session

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default position-sampling period while playing
pub const DEFAULT_SAMPLE_PERIOD: Duration = Duration::from_millis(100);

/// Playback session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No song selected
    Idle,

    /// Source assigned and start requested, confirmation pending
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Track ran out with no repeat; the song stays selected for display
    Ended,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the track ends
    Off,

    /// Advance through the whole catalog, wrapping
    All,

    /// Loop the current track only
    One,
}

/// Configuration for the playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial volume (0.0-1.0, default: 0.7)
    pub volume: f32,

    /// Initial shuffle flag (default: off)
    pub shuffled: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Position-sampling period (default: 100 ms)
    pub sample_period: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            volume: 0.7,
            shuffled: false,
            repeat: RepeatMode::Off,
            sample_period: DEFAULT_SAMPLE_PERIOD,
        }
    }
}
