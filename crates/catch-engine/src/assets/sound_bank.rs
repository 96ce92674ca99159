use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::api::types::SoundEvent;

/// Oscillator waveform for a synthesized note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// A single synthesized note inside a cue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Frequency in Hz.
    pub freq_hz: f32,
    /// Delay from the start of the cue, in milliseconds.
    #[serde(default)]
    pub offset_ms: f32,
    /// Note length in milliseconds.
    pub duration_ms: f32,
    /// Peak gain (0..1).
    #[serde(default = "default_gain")]
    pub gain: f32,
    #[serde(default)]
    pub wave: Waveform,
}

impl Note {
    pub fn new(freq_hz: f32, offset_ms: f32, duration_ms: f32) -> Self {
        Self {
            freq_hz,
            offset_ms,
            duration_ms,
            gain: default_gain(),
            wave: Waveform::Sine,
        }
    }

    pub fn with_wave(mut self, wave: Waveform) -> Self {
        self.wave = wave;
        self
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }
}

/// A sequence of notes played for one sound event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundCue {
    pub notes: Vec<Note>,
}

impl SoundCue {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Total length of the cue in milliseconds.
    pub fn duration_ms(&self) -> f32 {
        self.notes
            .iter()
            .map(|n| n.offset_ms + n.duration_ms)
            .fold(0.0, f32::max)
    }
}

/// Sound bank: maps numeric sound-event ids to synthesized cues.
/// Supplied by the game, optionally overridden from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoundBank {
    #[serde(default)]
    pub cues: HashMap<u32, SoundCue>,
}

fn default_gain() -> f32 {
    0.2
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cue(mut self, event: SoundEvent, cue: SoundCue) -> Self {
        self.cues.insert(event.0, cue);
        self
    }

    pub fn cue(&self, event: SoundEvent) -> Option<&SoundCue> {
        self.cues.get(&event.0)
    }

    /// Parse a bank from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
