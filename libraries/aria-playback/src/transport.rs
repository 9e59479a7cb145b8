//! Audio transport boundary
//!
//! The playback session drives the platform audio primitive through this
//! trait. Starting playback is asynchronous: `request_start` kicks off
//! loading/decoding, and the host later reports the outcome back to the
//! session as `transport_started` / `transport_failed`, tagged with the
//! play token the session handed out with the request.

use crate::error::Result;
use std::time::Duration;

/// Platform audio playback primitive
pub trait AudioTransport {
    /// Point the transport at a new audio source URI
    fn set_source(&mut self, uri: &str) -> Result<()>;

    /// Begin fetching/decoding the current source
    fn load(&mut self) -> Result<()>;

    /// Ask the transport to start playing
    ///
    /// Completion is reported asynchronously by the host, not by this call.
    fn request_start(&mut self) -> Result<()>;

    /// Pause output, keeping the position
    fn pause(&mut self);

    /// Resume output from the current position
    fn resume(&mut self);

    /// Current playback position
    fn position(&self) -> Duration;

    /// Move the playback position
    fn seek_to(&mut self, position: Duration);

    /// Total duration, once metadata has loaded
    fn duration(&self) -> Option<Duration>;

    /// Effective output volume in [0, 1]
    fn set_volume(&mut self, level: f32);
}

/// Transport that plays nothing
///
/// Keeps the session usable headless: every request succeeds, the position
/// stays at zero, and the duration is never known (so seeks are no-ops).
#[derive(Debug, Clone, Default)]
pub struct NullTransport {
    volume: f32,
}

impl NullTransport {
    /// Create a silent transport
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioTransport for NullTransport {
    fn set_source(&mut self, _uri: &str) -> Result<()> {
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        Ok(())
    }

    fn request_start(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn position(&self) -> Duration {
        Duration::ZERO
    }

    fn seek_to(&mut self, _position: Duration) {}

    fn duration(&self) -> Option<Duration> {
        None
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
    }
}
