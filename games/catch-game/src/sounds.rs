//! Sound ids emitted by the game and the synthesized cues behind them.

use catch_engine::{Note, SoundBank, SoundCue, SoundEvent, Waveform};

pub const CATCH_GOOD: SoundEvent = SoundEvent(1);
pub const CATCH_BAD: SoundEvent = SoundEvent(2);
pub const POWER_UP: SoundEvent = SoundEvent(3);
pub const WIN_JINGLE: SoundEvent = SoundEvent(4);

const C5: f32 = 523.25;
const E5: f32 = 659.25;
const G5: f32 = 783.99;
const C6: f32 = 1046.50;

pub fn bank() -> SoundBank {
    SoundBank::new()
        .with_cue(CATCH_GOOD, SoundCue::new(vec![Note::new(880.0, 0.0, 90.0)]))
        .with_cue(
            CATCH_BAD,
            SoundCue::new(vec![Note::new(140.0, 0.0, 180.0)
                .with_wave(Waveform::Sawtooth)
                .with_gain(0.15)]),
        )
        .with_cue(
            POWER_UP,
            SoundCue::new(vec![
                Note::new(660.0, 0.0, 80.0).with_wave(Waveform::Triangle),
                Note::new(990.0, 80.0, 120.0).with_wave(Waveform::Triangle),
            ]),
        )
        .with_cue(
            WIN_JINGLE,
            SoundCue::new(vec![
                Note::new(C5, 0.0, 150.0),
                Note::new(E5, 150.0, 150.0),
                Note::new(G5, 300.0, 150.0),
                Note::new(C6, 450.0, 300.0),
            ]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_emitted_sound_has_a_cue() {
        let bank = bank();
        for id in [CATCH_GOOD, CATCH_BAD, POWER_UP, WIN_JINGLE] {
            assert!(bank.cue(id).is_some(), "missing cue for {:?}", id);
        }
    }

    #[test]
    fn jingle_ascends_and_lasts_under_a_second() {
        let bank = bank();
        let jingle = bank.cue(WIN_JINGLE).unwrap();
        let freqs: Vec<f32> = jingle.notes.iter().map(|n| n.freq_hz).collect();
        assert!(freqs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(jingle.duration_ms(), 750.0);
    }
}
