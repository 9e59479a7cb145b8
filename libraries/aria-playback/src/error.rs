//! Error types for playback management

use aria_core::SongId;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Requested song id absent from the collection it was looked up in
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// The transport failed to load or start a source
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
