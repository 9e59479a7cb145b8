//! Playback session - the now-playing state machine
//!
//! Owns the single current-song handle and the play/pause/seek/advance
//! transitions. Catalog lookups take the relevant collection as a slice,
//! so the session never depends on the catalog store: the slice a caller
//! passes *is* the lookup scope (active catalog or trash).

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    sampler::PositionSampler,
    selector,
    settings::PlayerSettings,
    transport::AudioTransport,
    types::{RepeatMode, SessionConfig, SessionState},
};
use aria_core::{Song, SongId};
use std::time::Duration;
use tracing::debug;

/// Token tying a transport confirmation to the play request that caused it
///
/// Every play request bumps the session's token. A confirmation arriving
/// with an older token belongs to a superseded request and is discarded,
/// which keeps a slow load from hijacking a newer track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayToken(u64);

impl PlayToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Central playback state machine
///
/// Single-threaded and event-driven: the host calls commands in arrival
/// order and forwards transport callbacks as [`transport_started`],
/// [`transport_failed`], [`handle_ended`], and [`tick`]. State changes and
/// position samples come back as queued [`PlaybackEvent`]s.
///
/// [`transport_started`]: PlaybackSession::transport_started
/// [`transport_failed`]: PlaybackSession::transport_failed
/// [`handle_ended`]: PlaybackSession::handle_ended
/// [`tick`]: PlaybackSession::tick
pub struct PlaybackSession {
    // State
    state: SessionState,
    current: Option<Song>,

    // Settings
    settings: PlayerSettings,

    // Platform boundary
    transport: Box<dyn AudioTransport>,

    // Stale-confirmation guard
    token: PlayToken,

    // Recurring position sample
    sampler: PositionSampler,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackSession {
    /// Create a session over the given transport
    pub fn new(config: SessionConfig, mut transport: Box<dyn AudioTransport>) -> Self {
        let settings = PlayerSettings::new(config.volume, config.shuffled, config.repeat);
        transport.set_volume(settings.effective_volume());

        Self {
            state: SessionState::Idle,
            current: None,
            settings,
            transport,
            token: PlayToken::default(),
            sampler: PositionSampler::new(config.sample_period),
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Start playing a song from the given collection
    ///
    /// Requesting the current song again while playing or paused degrades
    /// to [`toggle_play_pause`] (no reload). Any other request stops the
    /// running transport, selects the record, and asks the transport to
    /// start; the returned token must be echoed by the confirmation.
    ///
    /// Fails with [`PlaybackError::SongNotFound`] (no state mutated) when
    /// the id is absent from `songs`. A synchronous transport failure
    /// recovers to `Paused` with the song still selected, so the UI can
    /// retry.
    ///
    /// [`toggle_play_pause`]: PlaybackSession::toggle_play_pause
    pub fn play(&mut self, songs: &[Song], id: SongId) -> Result<PlayToken> {
        let same_song = self.current.as_ref().is_some_and(|current| current.id == id);
        if same_song && matches!(self.state, SessionState::Playing | SessionState::Paused) {
            self.toggle_play_pause(songs)?;
            return Ok(self.token);
        }

        let song = songs
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(PlaybackError::SongNotFound(id))?;
        self.start_song(song)
    }

    /// Toggle between playing and paused
    ///
    /// From `Idle` or `Ended` with a non-empty catalog, starts the
    /// retained song if it is still present, else the first song.
    pub fn toggle_play_pause(&mut self, songs: &[Song]) -> Result<()> {
        match self.state {
            SessionState::Playing => {
                self.transport.pause();
                self.sampler.cancel();
                self.set_state(SessionState::Paused);
                Ok(())
            }
            SessionState::Paused => {
                self.transport.resume();
                self.sampler.start();
                self.set_state(SessionState::Playing);
                Ok(())
            }
            // Start already requested; wait for the confirmation
            SessionState::Loading => Ok(()),
            SessionState::Idle | SessionState::Ended => {
                let retained = self
                    .current
                    .as_ref()
                    .map(|s| s.id)
                    .filter(|id| songs.iter().any(|s| s.id == *id));
                let id = retained.or_else(|| songs.first().map(|s| s.id));
                match id {
                    Some(id) => self.play(songs, id).map(|_| ()),
                    None => Ok(()),
                }
            }
        }
    }

    /// Skip to the selector's next song
    ///
    /// No-op (returns `None`) without a current song or with an empty
    /// catalog. Always reloads, even when the selector lands on the
    /// current song (single-song catalog under shuffle).
    pub fn next(&mut self, songs: &[Song]) -> Result<Option<PlayToken>> {
        if self.current.is_none() || songs.is_empty() {
            return Ok(None);
        }

        let current = self.current.as_ref().map(|s| s.id);
        let mut rng = rand::thread_rng();
        match selector::next_song(songs, current, self.settings.is_shuffled(), &mut rng) {
            Some(id) => self.advance_to(songs, id).map(Some),
            None => Ok(None),
        }
    }

    /// Skip to the selector's previous song
    ///
    /// Same no-op and reload rules as [`next`](PlaybackSession::next).
    pub fn previous(&mut self, songs: &[Song]) -> Result<Option<PlayToken>> {
        if self.current.is_none() || songs.is_empty() {
            return Ok(None);
        }

        let current = self.current.as_ref().map(|s| s.id);
        let mut rng = rand::thread_rng();
        match selector::previous_song(songs, current, self.settings.is_shuffled(), &mut rng) {
            Some(id) => self.advance_to(songs, id).map(Some),
            None => Ok(None),
        }
    }

    /// Seek to a fraction of the track duration
    ///
    /// Valid while playing or paused; a no-op until the transport knows
    /// the duration. The fraction is clamped to [0, 1].
    pub fn seek(&mut self, fraction: f64) {
        if !matches!(self.state, SessionState::Playing | SessionState::Paused) {
            return;
        }
        let Some(duration) = self.transport.duration() else {
            return;
        };
        let fraction = fraction.clamp(0.0, 1.0);
        self.transport.seek_to(duration.mul_f64(fraction));
    }

    // ===== Transport Callbacks =====

    /// Apply a transport start confirmation
    ///
    /// A stale token (the request was superseded by a newer play) is
    /// discarded without touching any state.
    pub fn transport_started(&mut self, token: PlayToken) {
        if token != self.token {
            debug!("discarding stale transport confirmation");
            return;
        }
        if self.state == SessionState::Loading {
            self.sampler.start();
            self.set_state(SessionState::Playing);
        }
    }

    /// Apply an asynchronous transport failure
    ///
    /// Stale tokens are discarded. A fresh failure recovers to `Paused`
    /// with the song retained and queues a user-visible error.
    pub fn transport_failed(&mut self, token: PlayToken, message: &str) {
        if token != self.token {
            debug!("discarding stale transport failure");
            return;
        }

        self.sampler.cancel();
        self.set_state(SessionState::Paused);
        if let Some(song) = &self.current {
            self.pending_events.push(PlaybackEvent::Error {
                song_id: song.id,
                message: message.to_string(),
            });
        }
    }

    /// React to the transport reporting the end of the current track
    ///
    /// A stray end event with no song selected is ignored.
    pub fn handle_ended(&mut self, songs: &[Song]) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }

        match self.settings.repeat() {
            RepeatMode::One => {
                // Restart the same track in place
                self.transport.seek_to(Duration::ZERO);
                self.transport.resume();
                self.sampler.start();
                self.set_state(SessionState::Playing);
                Ok(())
            }
            RepeatMode::All => self.advance_or_finish(songs),
            RepeatMode::Off => {
                if self.settings.is_shuffled() {
                    self.advance_or_finish(songs)
                } else {
                    self.finish();
                    Ok(())
                }
            }
        }
    }

    /// Periodic position sample
    ///
    /// The host calls this on the sampler period; outside `Playing` (or
    /// after cancellation) it emits nothing.
    pub fn tick(&mut self) {
        if self.state != SessionState::Playing || !self.sampler.is_active() {
            return;
        }
        self.pending_events.push(PlaybackEvent::PositionUpdate {
            position_ms: self.transport.position().as_millis() as u64,
            duration_ms: self.transport.duration().map(|d| d.as_millis() as u64),
        });
    }

    // ===== Settings =====

    /// Set the stored volume level (clamped to [0, 1])
    pub fn set_volume(&mut self, level: f32) {
        self.settings.set_volume(level);
        self.apply_volume();
    }

    /// Flip mute; the stored level survives for un-mute
    pub fn toggle_mute(&mut self) {
        self.settings.toggle_mute();
        self.apply_volume();
    }

    /// Flip shuffle; affects selection only, never the catalog order
    pub fn toggle_shuffle(&mut self) -> bool {
        let shuffled = self.settings.toggle_shuffle();
        self.pending_events
            .push(PlaybackEvent::ShuffleChanged { shuffled });
        shuffled
    }

    /// Advance the repeat mode: Off -> All -> One -> Off
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        let mode = self.settings.cycle_repeat();
        self.pending_events.push(PlaybackEvent::RepeatChanged { mode });
        mode
    }

    // ===== State Queries =====

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The selected song, if any (survives trashing and `Ended`)
    pub fn current_song(&self) -> Option<&Song> {
        self.current.as_ref()
    }

    /// Check if audio should be running
    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Playback settings snapshot
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// Current transport position
    pub fn position(&self) -> Duration {
        self.transport.position()
    }

    /// Current track duration, once the transport knows it
    pub fn duration(&self) -> Option<Duration> {
        self.transport.duration()
    }

    /// Period the host should call [`tick`](PlaybackSession::tick) on
    pub fn sample_period(&self) -> Duration {
        self.sampler.period()
    }

    // ===== Events =====

    /// Drain queued playback events
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are events waiting
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Look up and start a song, bypassing the same-id toggle degrade
    fn advance_to(&mut self, songs: &[Song], id: SongId) -> Result<PlayToken> {
        let song = songs
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(PlaybackError::SongNotFound(id))?;
        self.start_song(song)
    }

    /// Replace the current song and request a transport start
    fn start_song(&mut self, song: Song) -> Result<PlayToken> {
        // Stop whatever is running or still loading
        self.transport.pause();
        self.sampler.cancel();

        let previous_song_id = self.current.as_ref().map(|s| s.id);
        let song_id = song.id;
        let uri = song.cdn_link.clone();
        self.current = Some(song);
        self.token = self.token.next();
        self.pending_events.push(PlaybackEvent::TrackChanged {
            song_id,
            previous_song_id,
        });

        if let Err(err) = self.begin_transport(&uri) {
            // Recover to Paused so the song stays selected for retry
            self.set_state(SessionState::Paused);
            self.pending_events.push(PlaybackEvent::Error {
                song_id,
                message: err.to_string(),
            });
            return Err(err);
        }

        self.set_state(SessionState::Loading);
        Ok(self.token)
    }

    fn begin_transport(&mut self, uri: &str) -> Result<()> {
        self.transport.set_source(uri)?;
        self.transport.load()?;
        self.transport.request_start()
    }

    fn advance_or_finish(&mut self, songs: &[Song]) -> Result<()> {
        let current = self.current.as_ref().map(|s| s.id);
        let mut rng = rand::thread_rng();
        match selector::next_song(songs, current, self.settings.is_shuffled(), &mut rng) {
            Some(id) => self.advance_to(songs, id).map(|_| ()),
            None => {
                self.finish();
                Ok(())
            }
        }
    }

    /// Stop at end of track: no repeat, catalog exhausted
    fn finish(&mut self) {
        self.sampler.cancel();
        self.set_state(SessionState::Ended);
    }

    fn set_state(&mut self, state: SessionState) {
        if self.state != state {
            debug!(?state, "playback state changed");
            self.state = state;
            self.pending_events.push(PlaybackEvent::StateChanged { state });
        }
    }

    fn apply_volume(&mut self) {
        self.transport.set_volume(self.settings.effective_volume());
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.settings.volume(),
            is_muted: self.settings.is_muted(),
        });
    }
}
