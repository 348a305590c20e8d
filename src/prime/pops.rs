//! Grouped blinks
//!
//! Primitives that walk through a short sequence of blinks before
//! repeating: pops, dashpops, tracer and blinke.

use super::{BLACK, BlinkTiming, Primitive, counter_u8, step_phase, to_counter};
use crate::{color::Rgb, palette::Palette};

const POP_TIMING: BlinkTiming = BlinkTiming::new(2, 8);
const POP_COUNT: u8 = 3;
const POPS_GAP_FRAMES: u8 = 40;

const DASH_TIMING: BlinkTiming = BlinkTiming::new(20, 8);

const TRACER_TIMING: BlinkTiming = BlinkTiming::new(3, 7);

const BLINKE_TIMING: BlinkTiming = BlinkTiming::new(3, 3);
const BLINKE_GAP_FRAMES: u8 = 50;

/// Three quick pops of one color, a pause, then the next color
///
/// Counters: `counter0` = phase, `counter1` = pops done (3 means pausing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopsPrime {
    phase: i8,
    stage: i8,
}

impl PopsPrime {
    pub const fn restore(phase: i8, stage: i8) -> Self {
        Self { phase, stage }
    }
}

impl Primitive for PopsPrime {
    fn render(&mut self, _tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let stage = counter_u8(self.stage).min(POP_COUNT);
        if stage < POP_COUNT {
            let (phase, done) = step_phase(&mut self.phase, POP_TIMING.period());
            if done {
                self.stage = to_counter(stage + 1);
            }
            if POP_TIMING.is_lit(phase) {
                palette.rgb_at(*cursor)
            } else {
                BLACK
            }
        } else {
            let (_, done) = step_phase(&mut self.phase, POPS_GAP_FRAMES);
            if done {
                self.stage = 0;
                *cursor = palette.advance(*cursor);
            }
            BLACK
        }
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, self.stage]
    }
}

/// A long dash of color 0 followed by one pop of every other color
///
/// Counters: `counter0` = phase, `counter1` = position (0 is the dash).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashPopsPrime {
    phase: i8,
    position: i8,
}

impl DashPopsPrime {
    pub const fn restore(phase: i8, position: i8) -> Self {
        Self { phase, position }
    }
}

impl Primitive for DashPopsPrime {
    fn render(&mut self, _tick: u32, palette: &Palette, _cursor: &mut u8) -> Rgb {
        let count = palette.num_colors();
        let position = counter_u8(self.position).min(count - 1);
        let timing = if position == 0 { DASH_TIMING } else { POP_TIMING };

        let (phase, done) = step_phase(&mut self.phase, timing.period());
        if done {
            let next = position + 1;
            self.position = if next >= count { 0 } else { to_counter(next) };
        }
        if timing.is_lit(phase) {
            palette.rgb_at(position)
        } else {
            BLACK
        }
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, self.position]
    }
}

/// Colors 1.. flash over a constant trail of color 0
///
/// With a single color only the trail is shown.
///
/// Counters: `counter0` = phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracerPrime {
    phase: i8,
}

impl TracerPrime {
    pub const fn restore(phase: i8) -> Self {
        Self { phase }
    }
}

impl Primitive for TracerPrime {
    fn render(&mut self, _tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let (phase, done) = step_phase(&mut self.phase, TRACER_TIMING.period());
        if palette.num_colors() == 1 {
            return palette.rgb_at(0);
        }

        if *cursor == 0 {
            *cursor = 1;
        }
        let color = if TRACER_TIMING.is_lit(phase) {
            palette.rgb_at(*cursor)
        } else {
            palette.rgb_at(0)
        };
        if done {
            let next = palette.advance(*cursor);
            *cursor = if next == 0 { 1 } else { next };
        }
        color
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, 0]
    }
}

/// Every color blinks once, then a pause
///
/// Counters: `counter0` = phase, `counter1` = color within the group
/// (`num_colors` means pausing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlinkePrime {
    phase: i8,
    index: i8,
}

impl BlinkePrime {
    pub const fn restore(phase: i8, index: i8) -> Self {
        Self { phase, index }
    }
}

impl Primitive for BlinkePrime {
    fn render(&mut self, _tick: u32, palette: &Palette, _cursor: &mut u8) -> Rgb {
        let count = palette.num_colors();
        let index = counter_u8(self.index).min(count);
        if index < count {
            let (phase, done) = step_phase(&mut self.phase, BLINKE_TIMING.period());
            if done {
                self.index = to_counter(index + 1);
            }
            if BLINKE_TIMING.is_lit(phase) {
                palette.rgb_at(index)
            } else {
                BLACK
            }
        } else {
            let (_, done) = step_phase(&mut self.phase, BLINKE_GAP_FRAMES);
            if done {
                self.index = 0;
            }
            BLACK
        }
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, self.index]
    }
}
