//! Strobe with pseudo-random blink lengths

use super::{BLACK, BlinkTiming, Primitive, step_phase};
use crate::{color::Rgb, math8::xorshift8, palette::Palette};

const LEGO_ON_FRAMES: [u8; 3] = [2, 8, 16];
const LEGO_OFF_FRAMES: u8 = 8;
const LEGO_SEED: u8 = 0x5A;

/// Counters: `counter0` = phase, `counter1` = xorshift state (never 0).
///
/// The generator state lives in the counter, so a restored mode replays
/// the same sequence of blink lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegoPrime {
    phase: i8,
    seed: i8,
}

impl Default for LegoPrime {
    fn default() -> Self {
        Self {
            phase: 0,
            seed: LEGO_SEED.cast_signed(),
        }
    }
}

impl LegoPrime {
    pub const fn restore(phase: i8, seed: i8) -> Self {
        Self { phase, seed }
    }

    fn timing(seed: u8) -> BlinkTiming {
        BlinkTiming::new(LEGO_ON_FRAMES[usize::from(seed % 3)], LEGO_OFF_FRAMES)
    }
}

impl Primitive for LegoPrime {
    fn render(&mut self, _tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let seed = match self.seed.cast_unsigned() {
            0 => 1,
            seed => seed,
        };
        let timing = Self::timing(seed);

        let (phase, done) = step_phase(&mut self.phase, timing.period());
        let color = if timing.is_lit(phase) {
            palette.rgb_at(*cursor)
        } else {
            BLACK
        };
        if done {
            self.seed = xorshift8(seed).cast_signed();
            *cursor = palette.advance(*cursor);
        }
        color
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, self.seed]
    }
}
