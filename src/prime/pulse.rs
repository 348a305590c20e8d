//! Brightness-modulated primitives

use super::{BLACK, BlinkTiming, Primitive, step_phase};
use crate::{
    color::{Rgb, scale_color},
    math8::{progress8, triangle8},
    palette::Palette,
};

const PULSE_FRAMES: u8 = 100;
const RAVIN_TIMING: BlinkTiming = BlinkTiming::new(5, 8);

/// Fade the current color in and out, then move on
///
/// Counters: `counter0` = frame within the pulse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PulsePrime {
    phase: i8,
}

impl PulsePrime {
    pub const fn restore(phase: i8) -> Self {
        Self { phase }
    }
}

impl Primitive for PulsePrime {
    fn render(&mut self, _tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let (phase, done) = step_phase(&mut self.phase, PULSE_FRAMES);
        let level = triangle8(progress8(phase, PULSE_FRAMES));
        let color = scale_color(palette.rgb_at(*cursor), level);
        if done {
            *cursor = palette.advance(*cursor);
        }
        color
    }

    fn counters(&self) -> [i8; 2] {
        [self.phase, 0]
    }
}

/// Strobe whose brightness swells with the frame clock
///
/// Brightness comes from the low bits of `tick`, so it stays continuous
/// when the tick counter wraps.
///
/// Counters: `counter0` = phase within the blink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RavinPrime {
    phase: i8,
}

impl RavinPrime {
    pub const fn restore(phase: i8) -> Self {
        Self { phase }
    }
}

impl Primitive for RavinPrime {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        let (phase, done) = step_phase(&mut self.phase, RAVIN_TIMING.period());
        let color = if RAVIN_TIMING.is_lit(phase) {
            let level = triangle8((tick >> 1) as u8);
            scale_color(palette.rgb_at(*cursor), level)
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
