//! Single-color blinks
//!
//! One blink of the current color per cycle, then the cursor moves on.
//! Strobe, hyper, strobie, seizure and ribbon differ only in timing;
//! ribbon has no dark part and renders solid bands.

use super::{BLACK, BlinkTiming, Primitive, step_phase};
use crate::{color::Rgb, palette::Palette};

/// Counters: `counter0` = phase within the blink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrobePrime {
    timing: BlinkTiming,
    phase: i8,
}

impl StrobePrime {
    pub const fn new(timing: BlinkTiming) -> Self {
        Self { timing, phase: 0 }
    }

    pub const fn restore(timing: BlinkTiming, phase: i8) -> Self {
        Self { timing, phase }
    }

    pub const fn timing(&self) -> BlinkTiming {
        self.timing
    }
}

impl Primitive for StrobePrime {
    fn render(&mut self, _tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let (phase, done) = step_phase(&mut self.phase, self.timing.period());
        let color = if self.timing.is_lit(phase) {
            palette.rgb_at(*cursor)
        } else {
            BLACK
        };
        if done {
            *cursor = palette.advance(*cursor);
        }
        color
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, 0]
    }
}
