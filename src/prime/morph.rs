//! Strobe that morphs from each color into the next

use super::{BLACK, BlinkTiming, Primitive, counter_u8, step_phase, to_counter};
use crate::{
    color::{Rgb, blend_colors},
    math8::progress8,
    palette::Palette,
};

const MORPH_TIMING: BlinkTiming = BlinkTiming::new(5, 10);
const MORPH_STEPS: u8 = 16;

/// Counters: `counter0` = phase, `counter1` = blend step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphPrime {
    phase: i8,
    step: i8,
}

impl MorphPrime {
    pub const fn restore(phase: i8, step: i8) -> Self {
        Self { phase, step }
    }
}

impl Primitive for MorphPrime {
    fn render(&mut self, _tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let step = counter_u8(self.step).min(MORPH_STEPS - 1);
        let (phase, done) = step_phase(&mut self.phase, MORPH_TIMING.period());

        let color = if MORPH_TIMING.is_lit(phase) {
            let from = palette.rgb_at(*cursor);
            let to = palette.rgb_at(palette.advance(*cursor));
            blend_colors(from, to, progress8(step, MORPH_STEPS))
        } else {
            BLACK
        };
        if done {
            if step + 1 >= MORPH_STEPS {
                self.step = 0;
                *cursor = palette.advance(*cursor);
            } else {
                self.step = to_counter(step + 1);
            }
        }
        color
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, self.step]
    }
}
