//! Sound cues for simulation events
//!
//! The synthesizer lives in the presentation layer. This module only decides
//! which cue an event maps to and describes each cue as a simple tone
//! envelope, so every front end sounds the same.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits wall
    WallHit,
    /// Ball hits brick (doesn't break)
    BrickHit,
    /// Brick breaks
    BrickBreak,
    /// Bonus brick breaks
    BonusBreak,
    /// Ball fell past the paddle
    LifeLost,
    /// Level cleared
    LevelClear,
    /// Game over
    GameOver,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// A single oscillator sweep with an exponential decay envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_s: f32,
    /// Peak gain before master/sfx volume
    pub gain: f32,
}

impl SoundEffect {
    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::WallBounce { .. } => SoundEffect::WallHit,
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::BrickDamaged { .. } => SoundEffect::BrickHit,
            GameEvent::BrickDestroyed { bonus: true, .. } => SoundEffect::BonusBreak,
            GameEvent::BrickDestroyed { bonus: false, .. } => SoundEffect::BrickBreak,
            GameEvent::LifeLost { .. } => SoundEffect::LifeLost,
            GameEvent::LevelCleared { .. } => SoundEffect::LevelClear,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }

    pub fn tone(&self) -> ToneSpec {
        match self {
            // Solid thump
            SoundEffect::PaddleHit => ToneSpec {
                waveform: Waveform::Sine,
                start_hz: 150.0,
                end_hz: 60.0,
                duration_s: 0.1,
                gain: 0.6,
            },
            // Higher ping
            SoundEffect::WallHit => ToneSpec {
                waveform: Waveform::Sine,
                start_hz: 400.0,
                end_hz: 400.0,
                duration_s: 0.08,
                gain: 0.3,
            },
            // Soft tap
            SoundEffect::BrickHit => ToneSpec {
                waveform: Waveform::Triangle,
                start_hz: 300.0,
                end_hz: 300.0,
                duration_s: 0.05,
                gain: 0.25,
            },
            SoundEffect::BrickBreak => ToneSpec {
                waveform: Waveform::Square,
                start_hz: 520.0,
                end_hz: 260.0,
                duration_s: 0.12,
                gain: 0.35,
            },
            // Rising chime
            SoundEffect::BonusBreak => ToneSpec {
                waveform: Waveform::Triangle,
                start_hz: 660.0,
                end_hz: 1320.0,
                duration_s: 0.25,
                gain: 0.4,
            },
            SoundEffect::LifeLost => ToneSpec {
                waveform: Waveform::Sawtooth,
                start_hz: 300.0,
                end_hz: 60.0,
                duration_s: 0.5,
                gain: 0.5,
            },
            SoundEffect::LevelClear => ToneSpec {
                waveform: Waveform::Square,
                start_hz: 440.0,
                end_hz: 880.0,
                duration_s: 0.6,
                gain: 0.4,
            },
            SoundEffect::GameOver => ToneSpec {
                waveform: Waveform::Sawtooth,
                start_hz: 220.0,
                end_hz: 40.0,
                duration_s: 1.2,
                gain: 0.5,
            },
        }
    }
}

/// Volume state shared by whatever plays the cues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioMixer {
    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cues to play for one tick's events, with final gain applied.
    ///
    /// Silent when muted. Repeated cues within a tick collapse to one.
    pub fn cues(&self, events: &[GameEvent]) -> Vec<(SoundEffect, ToneSpec)> {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return Vec::new();
        }

        let mut out: Vec<(SoundEffect, ToneSpec)> = Vec::new();
        for effect in events.iter().map(SoundEffect::for_event) {
            if out.iter().any(|(e, _)| *e == effect) {
                continue;
            }
            let mut tone = effect.tone();
            tone.gain *= vol;
            out.push((effect, tone));
        }
        out
    }
}
