//! Animation primitives with compile-time known variants
//!
//! All primitives are stored in an enum to avoid dynamic dispatch on the
//! per-frame path. Each payload owns the (at most two) counters its
//! primitive needs; [`PrimeSlot::counters`] exposes them as the mode's
//! `counter0`/`counter1` and [`Prime::restore`] rebuilds a payload from them.

mod candy;
mod edge;
mod lego;
mod morph;
mod pops;
mod pulse;
mod strobe;

use core::fmt;

pub use candy::CandyPrime;
pub use edge::{ChasePrime, EdgePrime};
pub use lego::LegoPrime;
pub use morph::MorphPrime;
pub use pops::{BlinkePrime, DashPopsPrime, PopsPrime, TracerPrime};
pub use pulse::{PulsePrime, RavinPrime};
pub use strobe::StrobePrime;

use crate::{color::Rgb, palette::Palette};

pub(crate) const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

const PRIME_NAME_STROBE: &str = "strobe";
const PRIME_NAME_HYPER: &str = "hyper";
const PRIME_NAME_POPS: &str = "pops";
const PRIME_NAME_STROBIE: &str = "strobie";
const PRIME_NAME_PULSE: &str = "pulse";
const PRIME_NAME_SEIZURE: &str = "seizure";
const PRIME_NAME_TRACER: &str = "tracer";
const PRIME_NAME_DASHPOPS: &str = "dashpops";
const PRIME_NAME_BLINKE: &str = "blinke";
const PRIME_NAME_EDGE: &str = "edge";
const PRIME_NAME_LEGO: &str = "lego";
const PRIME_NAME_CHASE: &str = "chase";
const PRIME_NAME_MORPH: &str = "morph";
const PRIME_NAME_RIBBON: &str = "ribbon";
const PRIME_NAME_RAVIN: &str = "ravin";
const PRIME_NAME_CANDY: &str = "candy";

const PRIME_ID_STROBE: u8 = 0;
const PRIME_ID_HYPER: u8 = 1;
const PRIME_ID_POPS: u8 = 2;
const PRIME_ID_STROBIE: u8 = 3;
const PRIME_ID_PULSE: u8 = 4;
const PRIME_ID_SEIZURE: u8 = 5;
const PRIME_ID_TRACER: u8 = 6;
const PRIME_ID_DASHPOPS: u8 = 7;
const PRIME_ID_BLINKE: u8 = 8;
const PRIME_ID_EDGE: u8 = 9;
const PRIME_ID_LEGO: u8 = 10;
const PRIME_ID_CHASE: u8 = 11;
const PRIME_ID_MORPH: u8 = 12;
const PRIME_ID_RIBBON: u8 = 13;
const PRIME_ID_RAVIN: u8 = 14;
const PRIME_ID_CANDY: u8 = 15;

/// Number of built-in primitives
pub const PRIME_COUNT: u8 = 16;

// Blink timings in frames.
const STROBE_TIMING: BlinkTiming = BlinkTiming::new(5, 8);
const HYPER_TIMING: BlinkTiming = BlinkTiming::new(17, 17);
const STROBIE_TIMING: BlinkTiming = BlinkTiming::new(3, 23);
const SEIZURE_TIMING: BlinkTiming = BlinkTiming::new(5, 95);
const RIBBON_TIMING: BlinkTiming = BlinkTiming::new(11, 0);

pub trait Primitive {
    /// Render a single frame and advance owned counters
    ///
    /// `cursor` is the mode's `cur_color`, already reduced modulo the
    /// palette length.
    fn render(&mut self, tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb;

    /// Owned counters as `[counter0, counter1]`
    fn counters(&self) -> [i8; 2];
}

/// Lit/dark split of one blink, in frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTiming {
    pub on: u8,
    pub off: u8,
}

impl BlinkTiming {
    pub const fn new(on: u8, off: u8) -> Self {
        Self { on, off }
    }

    /// Frames in one blink, never zero
    pub const fn period(self) -> u8 {
        let period = self.on.saturating_add(self.off);
        if period == 0 { 1 } else { period }
    }

    pub const fn is_lit(self, phase: u8) -> bool {
        phase < self.on
    }
}

/// Known primitive ids, as stored in palettes and records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Prime {
    Strobe = PRIME_ID_STROBE,
    Hyper = PRIME_ID_HYPER,
    Pops = PRIME_ID_POPS,
    Strobie = PRIME_ID_STROBIE,
    Pulse = PRIME_ID_PULSE,
    Seizure = PRIME_ID_SEIZURE,
    Tracer = PRIME_ID_TRACER,
    DashPops = PRIME_ID_DASHPOPS,
    Blinke = PRIME_ID_BLINKE,
    Edge = PRIME_ID_EDGE,
    Lego = PRIME_ID_LEGO,
    Chase = PRIME_ID_CHASE,
    Morph = PRIME_ID_MORPH,
    Ribbon = PRIME_ID_RIBBON,
    Ravin = PRIME_ID_RAVIN,
    Candy = PRIME_ID_CANDY,
}

/// Primitive slot - enum containing all possible primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimeSlot {
    Strobe(StrobePrime),
    Hyper(StrobePrime),
    Pops(PopsPrime),
    Strobie(StrobePrime),
    Pulse(PulsePrime),
    Seizure(StrobePrime),
    Tracer(TracerPrime),
    DashPops(DashPopsPrime),
    Blinke(BlinkePrime),
    Edge(EdgePrime),
    Lego(LegoPrime),
    Chase(ChasePrime),
    Morph(MorphPrime),
    Ribbon(StrobePrime),
    Ravin(RavinPrime),
    Candy(CandyPrime),
}

impl Prime {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PRIME_ID_STROBE => Self::Strobe,
            PRIME_ID_HYPER => Self::Hyper,
            PRIME_ID_POPS => Self::Pops,
            PRIME_ID_STROBIE => Self::Strobie,
            PRIME_ID_PULSE => Self::Pulse,
            PRIME_ID_SEIZURE => Self::Seizure,
            PRIME_ID_TRACER => Self::Tracer,
            PRIME_ID_DASHPOPS => Self::DashPops,
            PRIME_ID_BLINKE => Self::Blinke,
            PRIME_ID_EDGE => Self::Edge,
            PRIME_ID_LEGO => Self::Lego,
            PRIME_ID_CHASE => Self::Chase,
            PRIME_ID_MORPH => Self::Morph,
            PRIME_ID_RIBBON => Self::Ribbon,
            PRIME_ID_RAVIN => Self::Ravin,
            PRIME_ID_CANDY => Self::Candy,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Fresh slot with all counters at their start values
    pub fn to_slot(self) -> PrimeSlot {
        match self {
            Self::Strobe => PrimeSlot::Strobe(StrobePrime::new(STROBE_TIMING)),
            Self::Hyper => PrimeSlot::Hyper(StrobePrime::new(HYPER_TIMING)),
            Self::Pops => PrimeSlot::Pops(PopsPrime::default()),
            Self::Strobie => PrimeSlot::Strobie(StrobePrime::new(STROBIE_TIMING)),
            Self::Pulse => PrimeSlot::Pulse(PulsePrime::default()),
            Self::Seizure => PrimeSlot::Seizure(StrobePrime::new(SEIZURE_TIMING)),
            Self::Tracer => PrimeSlot::Tracer(TracerPrime::default()),
            Self::DashPops => PrimeSlot::DashPops(DashPopsPrime::default()),
            Self::Blinke => PrimeSlot::Blinke(BlinkePrime::default()),
            Self::Edge => PrimeSlot::Edge(EdgePrime::default()),
            Self::Lego => PrimeSlot::Lego(LegoPrime::default()),
            Self::Chase => PrimeSlot::Chase(ChasePrime::default()),
            Self::Morph => PrimeSlot::Morph(MorphPrime::default()),
            Self::Ribbon => PrimeSlot::Ribbon(StrobePrime::new(RIBBON_TIMING)),
            Self::Ravin => PrimeSlot::Ravin(RavinPrime::default()),
            Self::Candy => PrimeSlot::Candy(CandyPrime::default()),
        }
    }

    /// Slot resumed from previously captured counters
    pub fn restore(self, counter0: i8, counter1: i8) -> PrimeSlot {
        match self {
            Self::Strobe => PrimeSlot::Strobe(StrobePrime::restore(STROBE_TIMING, counter0)),
            Self::Hyper => PrimeSlot::Hyper(StrobePrime::restore(HYPER_TIMING, counter0)),
            Self::Pops => PrimeSlot::Pops(PopsPrime::restore(counter0, counter1)),
            Self::Strobie => PrimeSlot::Strobie(StrobePrime::restore(STROBIE_TIMING, counter0)),
            Self::Pulse => PrimeSlot::Pulse(PulsePrime::restore(counter0)),
            Self::Seizure => PrimeSlot::Seizure(StrobePrime::restore(SEIZURE_TIMING, counter0)),
            Self::Tracer => PrimeSlot::Tracer(TracerPrime::restore(counter0)),
            Self::DashPops => PrimeSlot::DashPops(DashPopsPrime::restore(counter0, counter1)),
            Self::Blinke => PrimeSlot::Blinke(BlinkePrime::restore(counter0, counter1)),
            Self::Edge => PrimeSlot::Edge(EdgePrime::restore(counter0, counter1)),
            Self::Lego => PrimeSlot::Lego(LegoPrime::restore(counter0, counter1)),
            Self::Chase => PrimeSlot::Chase(ChasePrime::restore(counter0, counter1)),
            Self::Morph => PrimeSlot::Morph(MorphPrime::restore(counter0, counter1)),
            Self::Ribbon => PrimeSlot::Ribbon(StrobePrime::restore(RIBBON_TIMING, counter0)),
            Self::Ravin => PrimeSlot::Ravin(RavinPrime::restore(counter0)),
            Self::Candy => PrimeSlot::Candy(CandyPrime::restore(counter0, counter1)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strobe => PRIME_NAME_STROBE,
            Self::Hyper => PRIME_NAME_HYPER,
            Self::Pops => PRIME_NAME_POPS,
            Self::Strobie => PRIME_NAME_STROBIE,
            Self::Pulse => PRIME_NAME_PULSE,
            Self::Seizure => PRIME_NAME_SEIZURE,
            Self::Tracer => PRIME_NAME_TRACER,
            Self::DashPops => PRIME_NAME_DASHPOPS,
            Self::Blinke => PRIME_NAME_BLINKE,
            Self::Edge => PRIME_NAME_EDGE,
            Self::Lego => PRIME_NAME_LEGO,
            Self::Chase => PRIME_NAME_CHASE,
            Self::Morph => PRIME_NAME_MORPH,
            Self::Ribbon => PRIME_NAME_RIBBON,
            Self::Ravin => PRIME_NAME_RAVIN,
            Self::Candy => PRIME_NAME_CANDY,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PRIME_NAME_STROBE => Some(Self::Strobe),
            PRIME_NAME_HYPER => Some(Self::Hyper),
            PRIME_NAME_POPS => Some(Self::Pops),
            PRIME_NAME_STROBIE => Some(Self::Strobie),
            PRIME_NAME_PULSE => Some(Self::Pulse),
            PRIME_NAME_SEIZURE => Some(Self::Seizure),
            PRIME_NAME_TRACER => Some(Self::Tracer),
            PRIME_NAME_DASHPOPS => Some(Self::DashPops),
            PRIME_NAME_BLINKE => Some(Self::Blinke),
            PRIME_NAME_EDGE => Some(Self::Edge),
            PRIME_NAME_LEGO => Some(Self::Lego),
            PRIME_NAME_CHASE => Some(Self::Chase),
            PRIME_NAME_MORPH => Some(Self::Morph),
            PRIME_NAME_RIBBON => Some(Self::Ribbon),
            PRIME_NAME_RAVIN => Some(Self::Ravin),
            PRIME_NAME_CANDY => Some(Self::Candy),
            _ => None,
        }
    }
}

impl fmt::Display for Prime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PrimeSlot {
    /// Render the current primitive
    pub fn render(&mut self, tick: u32, palette: &Palette, cursor: &mut u8) -> Rgb {
        match self {
            Self::Strobe(prime)
            | Self::Hyper(prime)
            | Self::Strobie(prime)
            | Self::Seizure(prime)
            | Self::Ribbon(prime) => prime.render(tick, palette, cursor),
            Self::Pops(prime) => prime.render(tick, palette, cursor),
            Self::Pulse(prime) => prime.render(tick, palette, cursor),
            Self::Tracer(prime) => prime.render(tick, palette, cursor),
            Self::DashPops(prime) => prime.render(tick, palette, cursor),
            Self::Blinke(prime) => prime.render(tick, palette, cursor),
            Self::Edge(prime) => prime.render(tick, palette, cursor),
            Self::Lego(prime) => prime.render(tick, palette, cursor),
            Self::Chase(prime) => prime.render(tick, palette, cursor),
            Self::Morph(prime) => prime.render(tick, palette, cursor),
            Self::Ravin(prime) => prime.render(tick, palette, cursor),
            Self::Candy(prime) => prime.render(tick, palette, cursor),
        }
    }

    /// Owned counters as `[counter0, counter1]`
    pub fn counters(&self) -> [i8; 2] {
        match self {
            Self::Strobe(prime)
            | Self::Hyper(prime)
            | Self::Strobie(prime)
            | Self::Seizure(prime)
            | Self::Ribbon(prime) => prime.counters(),
            Self::Pops(prime) => prime.counters(),
            Self::Pulse(prime) => prime.counters(),
            Self::Tracer(prime) => prime.counters(),
            Self::DashPops(prime) => prime.counters(),
            Self::Blinke(prime) => prime.counters(),
            Self::Edge(prime) => prime.counters(),
            Self::Lego(prime) => prime.counters(),
            Self::Chase(prime) => prime.counters(),
            Self::Morph(prime) => prime.counters(),
            Self::Ravin(prime) => prime.counters(),
            Self::Candy(prime) => prime.counters(),
        }
    }

    /// Get the primitive ID for external observation
    pub fn id(&self) -> Prime {
        match self {
            Self::Strobe(_) => Prime::Strobe,
            Self::Hyper(_) => Prime::Hyper,
            Self::Pops(_) => Prime::Pops,
            Self::Strobie(_) => Prime::Strobie,
            Self::Pulse(_) => Prime::Pulse,
            Self::Seizure(_) => Prime::Seizure,
            Self::Tracer(_) => Prime::Tracer,
            Self::DashPops(_) => Prime::DashPops,
            Self::Blinke(_) => Prime::Blinke,
            Self::Edge(_) => Prime::Edge,
            Self::Lego(_) => Prime::Lego,
            Self::Chase(_) => Prime::Chase,
            Self::Morph(_) => Prime::Morph,
            Self::Ribbon(_) => Prime::Ribbon,
            Self::Ravin(_) => Prime::Ravin,
            Self::Candy(_) => Prime::Candy,
        }
    }
}

/// Non-negative view of a counter
pub(crate) fn counter_u8(counter: i8) -> u8 {
    u8::try_from(counter).unwrap_or(0)
}

/// Store a small non-negative value in a counter
pub(crate) fn to_counter(value: u8) -> i8 {
    i8::try_from(value).unwrap_or(i8::MAX)
}

/// Advance a phase counter through `period` frames
///
/// Returns the phase for this frame and whether it was the last one of the
/// period. Out-of-range counters are pulled back into the period.
pub(crate) fn step_phase(counter: &mut i8, period: u8) -> (u8, bool) {
    let period = period.max(1);
    let phase = counter_u8(*counter).min(period - 1);
    let next = phase + 1;
    if next >= period {
        *counter = 0;
        (phase, true)
    } else {
        *counter = to_counter(next);
        (phase, false)
    }
}
