//! Candy strobe: a sliding window of three colors

use super::{BLACK, BlinkTiming, Primitive, counter_u8, step_phase, to_counter};
use crate::{color::Rgb, palette::Palette};

const CANDY_TIMING: BlinkTiming = BlinkTiming::new(5, 8);
const CANDY_SPAN: u8 = 3;
const CANDY_REPEATS: u8 = 3;
const CANDY_STROBES: u8 = CANDY_SPAN * CANDY_REPEATS;

/// Strobe `cur, cur+1, cur+2` three times over, then slide by one
///
/// Counters: `counter0` = phase, `counter1` = strobe within the group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandyPrime {
    phase: i8,
    strobe: i8,
}

impl CandyPrime {
    pub const fn restore(phase: i8, strobe: i8) -> Self {
        Self { phase, strobe }
    }
}

impl Primitive for CandyPrime {
    fn render(&mut self, _tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let strobe = counter_u8(self.strobe).min(CANDY_STROBES - 1);
        let (phase, done) = step_phase(&mut self.phase, CANDY_TIMING.period());

        let color = if CANDY_TIMING.is_lit(phase) {
            let base = *cursor % palette.num_colors();
            palette.rgb_at(base + strobe % CANDY_SPAN)
        } else {
            BLACK
        };
        if done {
            if strobe + 1 >= CANDY_STROBES {
                self.strobe = 0;
                *cursor = palette.advance(*cursor);
            } else {
                self.strobe = to_counter(strobe + 1);
            }
        }
        color
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, self.strobe]
    }
}
