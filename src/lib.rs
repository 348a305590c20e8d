#![no_std]

pub mod accel;
pub mod color;
pub mod frame_scheduler;
pub mod math8;
pub mod mode;
pub mod palette;
pub mod prime;
pub mod store;

pub use accel::{
    ACC_COUNTER_LIMIT, AccMode, AccSample, AccSensitivity, AccelerometerClassifier, Motion,
    VariantSelector,
};
pub use color::{Rgb, unpack_color};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use mode::{ConfigError, Mode, ModeConfig, RenderState, VariantConfig};
pub use palette::{PALETTE_SIZE, Palette};
pub use prime::{Prime, PrimeSlot};
pub use store::{LoadError, MemoryStorage, ModeRecord, RECORD_SIZE, Storage, StorageError};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Abstract accelerometer trait
///
/// Returns the latest reading in g units, or `None` if no new sample is
/// available this frame.
pub trait AccelerometerSource {
    fn sample(&mut self) -> Option<AccSample>;
}
