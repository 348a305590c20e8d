//! Walking primitives: edge and chase

use super::{BLACK, Primitive, counter_u8, step_phase, to_counter};
use crate::{color::Rgb, palette::Palette};

const EDGE_STEP_FRAMES: u8 = 2;
const EDGE_GAP_FRAMES: u8 = 12;

const CHASE_WINDOW_FRAMES: u8 = 10;
const CHASE_STEPS: u8 = 5;
const CHASE_SHRINK_FRAMES: u8 = 2;

/// Walk from the last color to color 0 and back out
///
/// Colors nearer to 0 hold longer: a color `d` steps from the edge is
/// shown for `2 * (d + 1)` frames. A short pause follows each full walk.
///
/// Counters: `counter0` = phase, `counter1` = position in the walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgePrime {
    phase: i8,
    position: i8,
}

impl EdgePrime {
    pub const fn restore(phase: i8, position: i8) -> Self {
        Self { phase, position }
    }
}

/// Palette index shown at `position` of a walk over `count` colors
const fn edge_index(position: u8, count: u8) -> u8 {
    let center = count - 1;
    if position <= center {
        center - position
    } else {
        position - center
    }
}

impl Primitive for EdgePrime {
    fn render(&mut self, _tick: u32, palette: &Palette, _cursor: &mut u8) -> Rgb {
        let count = palette.num_colors();
        let walk = (count * 2).saturating_sub(2).max(1);
        let position = counter_u8(self.position).min(walk);

        if position < walk {
            let index = edge_index(position, count);
            let frames = EDGE_STEP_FRAMES * (count - index);
            let (_, done) = step_phase(&mut self.phase, frames);
            if done {
                self.position = to_counter(position + 1);
            }
            palette.rgb_at(index)
        } else {
            let (_, done) = step_phase(&mut self.phase, EDGE_GAP_FRAMES);
            if done {
                self.position = 0;
            }
            BLACK
        }
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, self.position]
    }
}

/// Blinks of one color that shrink step by step, then the next color
///
/// Counters: `counter0` = phase, `counter1` = step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChasePrime {
    phase: i8,
    step: i8,
}

impl ChasePrime {
    pub const fn restore(phase: i8, step: i8) -> Self {
        Self { phase, step }
    }
}

impl Primitive for ChasePrime {
    fn render(&mut self, _tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let step = counter_u8(self.step).min(CHASE_STEPS - 1);
        let lit_frames = CHASE_WINDOW_FRAMES - CHASE_SHRINK_FRAMES * step;

        let (phase, done) = step_phase(&mut self.phase, CHASE_WINDOW_FRAMES);
        let color = if phase < lit_frames {
            palette.rgb_at(*cursor)
        } else {
            BLACK
        };
        if done {
            if step + 1 >= CHASE_STEPS {
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
