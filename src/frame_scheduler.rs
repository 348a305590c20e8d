//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{AccelerometerSource, Mode, OutputDriver};

/// Default target frame rate (500 FPS).
pub const DEFAULT_FPS: u32 = 500;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration =
    Duration::from_micros(1_000_000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that drives one mode.
///
/// Every tick it:
/// - Feeds the latest accelerometer sample to the mode
/// - Renders one pixel and hands it to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// If the caller falls more than two frames behind, the backlog is skipped
/// instead of rendered in a burst.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(mode, sensor, driver);
///
/// loop {
///     let now = get_current_time_us();
///     let result = scheduler.tick(Instant::from_micros(now));
///
///     // Platform-specific sleep
///     sleep_us(result.sleep_duration.as_micros());
/// }
/// ```
pub struct FrameScheduler<A: AccelerometerSource, O: OutputDriver> {
    mode: Mode,
    sensor: A,
    output: O,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<A: AccelerometerSource, O: OutputDriver> FrameScheduler<A, O> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (500 FPS) for frame timing.
    pub fn new(mode: Mode, sensor: A, output: O) -> Self {
        Self::with_frame_duration(mode, sensor, output, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(mode: Mode, sensor: A, output: O, frame_duration: Duration) -> Self {
        Self {
            mode,
            sensor,
            output,
            next_frame: Instant::from_ticks(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        if let Some(sample) = self.sensor.sample() {
            self.mode.update_acc(sample);
        }
        let pixel = self.mode.render();
        self.output.write(&[pixel]);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Get a mutable reference to the mode.
    pub fn mode_mut(&mut self) -> &mut Mode {
        &mut self.mode
    }

    /// Get a mutable reference to the accelerometer source.
    pub fn sensor_mut(&mut self) -> &mut A {
        &mut self.sensor
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Give back the mode, sensor and driver.
    pub fn into_parts(self) -> (Mode, A, O) {
        (self.mode, self.sensor, self.output)
    }
}
