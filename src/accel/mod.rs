//! Accelerometer interpretation
//!
//! Turns raw g-unit samples into a motion signal that drives variant
//! selection. Five interpretation modes share three sensitivity bands.

mod selector;

use core::fmt;

pub use selector::{ACC_COUNTER_LIMIT, VariantSelector};

const ACC_MODE_NAME_OFF: &str = "off";
const ACC_MODE_NAME_SPEED: &str = "speed";
const ACC_MODE_NAME_TILTX: &str = "tilt_x";
const ACC_MODE_NAME_TILTY: &str = "tilt_y";
const ACC_MODE_NAME_FLIPZ: &str = "flip_z";

const ACC_MODE_ID_OFF: u8 = 0;
const ACC_MODE_ID_SPEED: u8 = 1;
const ACC_MODE_ID_TILTX: u8 = 2;
const ACC_MODE_ID_TILTY: u8 = 3;
const ACC_MODE_ID_FLIPZ: u8 = 4;

const SENSITIVITY_NAME_LOW: &str = "low";
const SENSITIVITY_NAME_MEDIUM: &str = "medium";
const SENSITIVITY_NAME_HIGH: &str = "high";

const SENSITIVITY_ID_LOW: u8 = 0;
const SENSITIVITY_ID_MEDIUM: u8 = 1;
const SENSITIVITY_ID_HIGH: u8 = 2;

// Excess over the 1 g resting magnitude needed to count as shaking.
const SPEED_THRESHOLD_LOW: f32 = 1.5;
const SPEED_THRESHOLD_MEDIUM: f32 = 1.0;
const SPEED_THRESHOLD_HIGH: f32 = 0.5;

// Single-axis magnitude needed to count as tilted or flipped.
const TILT_THRESHOLD_LOW: f32 = 0.75;
const TILT_THRESHOLD_MEDIUM: f32 = 0.5;
const TILT_THRESHOLD_HIGH: f32 = 0.25;

/// Resting magnitude of the acceleration vector
const GRAVITY_G: f32 = 1.0;

/// Samples beyond the sensor's full scale are treated as glitches
pub const MAX_ABS_G: f32 = 16.0;

/// How raw samples are interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AccMode {
    /// Never switch variants
    #[default]
    Off = ACC_MODE_ID_OFF,
    /// Shaking selects variant 1, holding still selects variant 0
    Speed = ACC_MODE_ID_SPEED,
    /// Positive x tilt selects variant 1, negative selects variant 0
    TiltX = ACC_MODE_ID_TILTX,
    /// Positive y tilt selects variant 1, negative selects variant 0
    TiltY = ACC_MODE_ID_TILTY,
    /// Face down selects variant 1, face up selects variant 0
    FlipZ = ACC_MODE_ID_FLIPZ,
}

impl AccMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ACC_MODE_ID_OFF => Self::Off,
            ACC_MODE_ID_SPEED => Self::Speed,
            ACC_MODE_ID_TILTX => Self::TiltX,
            ACC_MODE_ID_TILTY => Self::TiltY,
            ACC_MODE_ID_FLIPZ => Self::FlipZ,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => ACC_MODE_NAME_OFF,
            Self::Speed => ACC_MODE_NAME_SPEED,
            Self::TiltX => ACC_MODE_NAME_TILTX,
            Self::TiltY => ACC_MODE_NAME_TILTY,
            Self::FlipZ => ACC_MODE_NAME_FLIPZ,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ACC_MODE_NAME_OFF => Some(Self::Off),
            ACC_MODE_NAME_SPEED => Some(Self::Speed),
            ACC_MODE_NAME_TILTX => Some(Self::TiltX),
            ACC_MODE_NAME_TILTY => Some(Self::TiltY),
            ACC_MODE_NAME_FLIPZ => Some(Self::FlipZ),
            _ => None,
        }
    }
}

impl fmt::Display for AccMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold band used by the classifier
///
/// Thresholds are monotonic: `Low >= Medium >= High`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AccSensitivity {
    Low = SENSITIVITY_ID_LOW,
    #[default]
    Medium = SENSITIVITY_ID_MEDIUM,
    High = SENSITIVITY_ID_HIGH,
}

impl AccSensitivity {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SENSITIVITY_ID_LOW => Self::Low,
            SENSITIVITY_ID_MEDIUM => Self::Medium,
            SENSITIVITY_ID_HIGH => Self::High,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => SENSITIVITY_NAME_LOW,
            Self::Medium => SENSITIVITY_NAME_MEDIUM,
            Self::High => SENSITIVITY_NAME_HIGH,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            SENSITIVITY_NAME_LOW => Some(Self::Low),
            SENSITIVITY_NAME_MEDIUM => Some(Self::Medium),
            SENSITIVITY_NAME_HIGH => Some(Self::High),
            _ => None,
        }
    }

    /// Excess over 1 g that counts as shaking
    pub const fn speed_threshold(self) -> f32 {
        match self {
            Self::Low => SPEED_THRESHOLD_LOW,
            Self::Medium => SPEED_THRESHOLD_MEDIUM,
            Self::High => SPEED_THRESHOLD_HIGH,
        }
    }

    /// Axis magnitude that counts as tilted or flipped
    pub const fn tilt_threshold(self) -> f32 {
        match self {
            Self::Low => TILT_THRESHOLD_LOW,
            Self::Medium => TILT_THRESHOLD_MEDIUM,
            Self::High => TILT_THRESHOLD_HIGH,
        }
    }
}

impl fmt::Display for AccSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accelerometer reading in g units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// All axes finite and within the sensor's full scale
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|axis| axis.is_finite() && libm::fabsf(*axis) <= MAX_ABS_G)
    }

    /// Length of the acceleration vector
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Direction a classified sample pushes the variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Toward variant 1
    Active,
    /// Toward variant 0
    Rest,
}

/// Converts samples into motion events for one mode and sensitivity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccelerometerClassifier {
    mode: AccMode,
    sensitivity: AccSensitivity,
}

impl AccelerometerClassifier {
    pub const fn new(mode: AccMode, sensitivity: AccSensitivity) -> Self {
        Self { mode, sensitivity }
    }

    pub const fn mode(&self) -> AccMode {
        self.mode
    }

    pub const fn sensitivity(&self) -> AccSensitivity {
        self.sensitivity
    }

    pub fn set_mode(&mut self, mode: AccMode) {
        self.mode = mode;
    }

    pub fn set_sensitivity(&mut self, sensitivity: AccSensitivity) {
        self.sensitivity = sensitivity;
    }

    /// Classify one sample
    ///
    /// Returns `None` when the mode is off, the sample is invalid, or the
    /// reading falls inside the dead band between the two directions.
    pub fn classify(&self, sample: AccSample) -> Option<Motion> {
        if !sample.is_valid() {
            return None;
        }

        match self.mode {
            AccMode::Off => None,
            AccMode::Speed => {
                let threshold = self.sensitivity.speed_threshold();
                let excess = libm::fabsf(sample.magnitude() - GRAVITY_G);
                if excess >= threshold {
                    Some(Motion::Active)
                } else if excess < threshold / 2.0 {
                    Some(Motion::Rest)
                } else {
                    None
                }
            }
            AccMode::TiltX => self.classify_axis(sample.x),
            AccMode::TiltY => self.classify_axis(sample.y),
            AccMode::FlipZ => self.classify_axis(-sample.z),
        }
    }

    fn classify_axis(&self, value: f32) -> Option<Motion> {
        let threshold = self.sensitivity.tilt_threshold();
        if value > threshold {
            Some(Motion::Active)
        } else if value < -threshold {
            Some(Motion::Rest)
        } else {
            None
        }
    }
}
