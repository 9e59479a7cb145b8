//! Aria Player - Playback Management
//!
//! Platform-agnostic playback management for Aria Player.
//!
//! This crate provides:
//! - The now-playing state machine (Idle / Loading / Playing / Paused /
//!   Ended) with stale-confirmation guarding
//! - Track selection under sequential, shuffled, and repeat policies
//! - Playback settings (shuffle, repeat, volume, mute)
//! - Host-polled position sampling
//! - Queued playback events for UI synchronization
//!
//! # Architecture
//!
//! `aria-playback` is completely platform-agnostic:
//! - No dependency on any audio backend
//! - No dependency on `aria-catalog` (collections arrive as slices; the
//!   slice a caller passes is the lookup scope)
//!
//! The platform audio primitive is provided via the [`AudioTransport`]
//! trait. Starting playback is asynchronous: the session hands out a
//! [`PlayToken`] with each request and the host echoes it back with the
//! outcome, so confirmations for superseded requests are discarded.
//!
//! # Example
//!
//! ```rust
//! use aria_playback::{NullTransport, PlaybackSession, SessionConfig, SessionState};
//!
//! let mut session = PlaybackSession::new(
//!     SessionConfig::default(),
//!     Box::new(NullTransport::new()),
//! );
//!
//! // Volume and settings work before any song is selected
//! session.set_volume(0.8);
//! session.toggle_shuffle();
//! assert_eq!(session.state(), SessionState::Idle);
//!
//! // let token = session.play(catalog.songs(), id)?;
//! // ... host confirms: session.transport_started(token);
//! ```

mod error;
mod events;
mod sampler;
pub mod selector;
mod session;
mod settings;
mod transport;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use sampler::PositionSampler;
pub use session::{PlayToken, PlaybackSession};
pub use settings::PlayerSettings;
pub use transport::{AudioTransport, NullTransport};
pub use types::{RepeatMode, SessionConfig, SessionState};
