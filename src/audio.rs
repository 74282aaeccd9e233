//! Sound cue sink
//!
//! The game only names the cue; playback belongs to whatever backend the host
//! plugs in. Playback is fire-and-forget and never reports failure back.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Title -> Playing
    GameStart,
    /// Predator got the eel
    GameOver,
    /// Stretch pressed
    Stretch,
    /// Food eaten
    Eat,
    /// Current reversed
    FlowChange,
}

impl SoundEffect {
    /// Stable clip identifier for asset lookup
    pub fn clip_id(&self) -> &'static str {
        match self {
            SoundEffect::GameStart => "game_start",
            SoundEffect::GameOver => "game_over",
            SoundEffect::Stretch => "stretch",
            SoundEffect::Eat => "eat",
            SoundEffect::FlowChange => "flow_change",
        }
    }
}

/// Something that can play a cue. Must not block.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs cues instead of playing them (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("play {}", effect.clip_id());
    }
}

/// Volume and mute gating in front of a backend
#[derive(Debug)]
pub struct AudioManager<B> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioSink> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Pick up volume and mute preferences
    pub fn from_settings(backend: B, settings: &Settings) -> Self {
        let mut manager = Self::new(backend);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: AudioSink> AudioSink for AudioManager<B> {
    fn play(&mut self, effect: SoundEffect) {
        if self.effective_volume() <= 0.0 {
            return;
        }
        self.backend.play(effect);
    }
}
