//! WebAudio synth for the game's `SoundBank`.
//!
//! Audio is optional: if an `AudioContext` cannot be created the player stays
//! silent and the game runs unchanged.

use catch_engine::{Note, SoundBank, SoundEvent, Waveform};
use wasm_bindgen::prelude::*;
use web_sys::{AudioContext, OscillatorType};

/// Gain floor for the exponential release (exponential ramps cannot reach 0).
const SILENCE: f32 = 0.0001;

pub struct AudioPlayer {
    ctx: Option<AudioContext>,
    bank: SoundBank,
}

impl AudioPlayer {
    pub fn new(bank: SoundBank) -> Self {
        let ctx = match AudioContext::new() {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                log::debug!("audio disabled: {:?}", err);
                None
            }
        };
        Self { ctx, bank }
    }

    pub fn is_enabled(&self) -> bool {
        self.ctx.is_some()
    }

    pub fn set_bank(&mut self, bank: SoundBank) {
        self.bank = bank;
    }

    /// Browsers start contexts suspended until a user gesture; call from input handlers.
    pub fn unlock(&self) {
        if let Some(ctx) = &self.ctx {
            if let Err(err) = ctx.resume() {
                log::debug!("audio: resume failed: {:?}", err);
            }
        }
    }

    /// Play the cue bound to `event`, if any.
    pub fn play(&self, event: SoundEvent) {
        let (Some(ctx), Some(cue)) = (&self.ctx, self.bank.cue(event)) else {
            return;
        };
        for note in &cue.notes {
            if let Err(err) = schedule_note(ctx, note) {
                log::debug!("audio: note {:?} skipped: {:?}", note, err);
            }
        }
    }
}

fn oscillator_type(wave: Waveform) -> OscillatorType {
    match wave {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Square => OscillatorType::Square,
        Waveform::Triangle => OscillatorType::Triangle,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    }
}

fn schedule_note(ctx: &AudioContext, note: &Note) -> Result<(), JsValue> {
    let start = ctx.current_time() + note.offset_ms as f64 / 1000.0;
    let end = start + note.duration_ms as f64 / 1000.0;

    let osc = ctx.create_oscillator()?;
    osc.set_type(oscillator_type(note.wave));
    osc.frequency().set_value_at_time(note.freq_hz, start)?;

    let gain = ctx.create_gain()?;
    gain.gain().set_value_at_time(note.gain.max(SILENCE), start)?;
    gain.gain().exponential_ramp_to_value_at_time(SILENCE, end)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start_with_when(start)?;
    osc.stop_with_when(end)?;
    Ok(())
}
