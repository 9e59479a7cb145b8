//! Playback settings
//!
//! Shuffle flag, repeat mode, volume level, and mute. Mute forces the
//! effective output volume to 0 without touching the stored level, so
//! un-muting restores the exact pre-mute volume rather than a stale one.

use crate::types::RepeatMode;

/// Player settings with small transition rules
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    /// Stored volume level (0.0-1.0)
    volume: f32,

    /// Mute state (preserves the stored level)
    muted: bool,

    /// Shuffle flag (selection only, never reorders the catalog)
    shuffled: bool,

    /// Repeat mode
    repeat: RepeatMode,
}

impl PlayerSettings {
    /// Create settings with an initial volume, shuffle flag, and repeat mode
    pub fn new(volume: f32, shuffled: bool, repeat: RepeatMode) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            muted: false,
            shuffled,
            repeat,
        }
    }

    /// Set the stored volume level, clamped to [0, 1]
    ///
    /// The stored level always updates, muted or not, so un-muting
    /// restores this level.
    pub fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
    }

    /// Stored volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Volume the transport should actually output: 0 while muted
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Flip the mute flag
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the shuffle flag; no other side effects
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffled = !self.shuffled;
        self.shuffled
    }

    /// Check if shuffled
    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Advance the repeat mode: Off -> All -> One -> Off
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = match self.repeat {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        };
        self.repeat
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self::new(0.7, false, RepeatMode::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_to_unit_range() {
        let mut settings = PlayerSettings::default();

        settings.set_volume(1.5);
        assert_eq!(settings.volume(), 1.0);

        settings.set_volume(-0.2);
        assert_eq!(settings.volume(), 0.0);
    }

    #[test]
    fn mute_round_trip_restores_exact_volume() {
        let mut settings = PlayerSettings::default();
        settings.set_volume(0.8);

        settings.toggle_mute();
        assert_eq!(settings.effective_volume(), 0.0);
        assert_eq!(settings.volume(), 0.8); // Level preserved

        settings.toggle_mute();
        assert_eq!(settings.effective_volume(), 0.8);
    }

    #[test]
    fn volume_set_while_muted_applies_on_unmute() {
        let mut settings = PlayerSettings::default();
        settings.toggle_mute();

        settings.set_volume(0.3);
        assert_eq!(settings.effective_volume(), 0.0);

        settings.toggle_mute();
        assert_eq!(settings.effective_volume(), 0.3);
    }

    #[test]
    fn repeat_cycles_back_to_start_after_three_steps() {
        let mut settings = PlayerSettings::default();
        assert_eq!(settings.repeat(), RepeatMode::Off);

        assert_eq!(settings.cycle_repeat(), RepeatMode::All);
        assert_eq!(settings.cycle_repeat(), RepeatMode::One);
        assert_eq!(settings.cycle_repeat(), RepeatMode::Off);
    }

    #[test]
    fn toggle_shuffle_flips_only_the_flag() {
        let mut settings = PlayerSettings::default();
        settings.set_volume(0.5);

        assert!(settings.toggle_shuffle());
        assert!(settings.is_shuffled());
        assert!(!settings.toggle_shuffle());

        // Nothing else moved
        assert_eq!(settings.volume(), 0.5);
        assert_eq!(settings.repeat(), RepeatMode::Off);
        assert!(!settings.is_muted());
    }
}
