//! A single motion-switched animation mode
//!
//! A [`Mode`] owns two variants (primitive + palette), picks one of them from
//! accelerometer input, and renders one pixel per frame. Its configuration
//! can be saved to and restored from a [`Storage`] slot.

use core::fmt::Write;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    accel::{AccMode, AccSample, AccSensitivity, AccelerometerClassifier, VariantSelector},
    color::Rgb,
    palette::{PALETTE_SIZE, Palette},
    prime::{Prime, PrimeSlot},
    store::{LoadError, ModeRecord, RECORD_SIZE, Storage, StorageError},
};

/// Number of variants in a mode
pub const VARIANT_COUNT: usize = 2;

/// Capacity of [`Mode::summary`]
pub const SUMMARY_CAPACITY: usize = 192;

/// Invalid construction or customization input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPrime(u8),
    InvalidColorCount(u8),
    InvalidVariant(u8),
    InvalidSlot(u8),
    InvalidAccMode(u8),
    InvalidSensitivity(u8),
}

/// One animation definition: primitive plus palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    pub prime: Prime,
    pub palette: Palette,
}

impl VariantConfig {
    pub const fn new(prime: Prime, palette: Palette) -> Self {
        Self { prime, palette }
    }

    /// Build a variant from the raw bytes used in firmware tables
    pub fn from_raw(
        prime: u8,
        num_colors: u8,
        colors: [u8; PALETTE_SIZE],
    ) -> Result<Self, ConfigError> {
        let prime = Prime::from_raw(prime).ok_or(ConfigError::InvalidPrime(prime))?;
        let palette =
            Palette::new(colors, num_colors).ok_or(ConfigError::InvalidColorCount(num_colors))?;
        Ok(Self { prime, palette })
    }
}

/// Factory defaults of a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    pub acc_mode: AccMode,
    pub acc_sensitivity: AccSensitivity,
    pub variants: [VariantConfig; VARIANT_COUNT],
}

impl ModeConfig {
    pub const fn new(
        acc_mode: AccMode,
        acc_sensitivity: AccSensitivity,
        variants: [VariantConfig; VARIANT_COUNT],
    ) -> Self {
        Self {
            acc_mode,
            acc_sensitivity,
            variants,
        }
    }

    /// Build defaults from raw acc settings and two raw variants
    pub fn from_raw(
        acc_mode: u8,
        acc_sensitivity: u8,
        variants: [VariantConfig; VARIANT_COUNT],
    ) -> Result<Self, ConfigError> {
        let acc_mode = AccMode::from_raw(acc_mode).ok_or(ConfigError::InvalidAccMode(acc_mode))?;
        let acc_sensitivity = AccSensitivity::from_raw(acc_sensitivity)
            .ok_or(ConfigError::InvalidSensitivity(acc_sensitivity))?;
        Ok(Self::new(acc_mode, acc_sensitivity, variants))
    }
}

/// Transient render state
///
/// Capturing this and restoring it later replays the exact same frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    pub tick: u32,
    pub cur_color: u8,
    pub counter0: i8,
    pub counter1: i8,
}

/// Mode engine
#[derive(Debug, Clone)]
pub struct Mode {
    defaults: ModeConfig,
    eeprom_addr: u16,

    // Persistent state
    classifier: AccelerometerClassifier,
    selector: VariantSelector,
    variants: [VariantConfig; VARIANT_COUNT],

    // Render state
    tick: u32,
    cur_color: u8,
    slot: PrimeSlot,
}

impl Mode {
    /// Create a mode with factory defaults and its storage address
    pub fn new(eeprom_addr: u16, defaults: ModeConfig) -> Self {
        Self {
            defaults,
            eeprom_addr,
            classifier: AccelerometerClassifier::new(defaults.acc_mode, defaults.acc_sensitivity),
            selector: VariantSelector::new(0),
            variants: defaults.variants,
            tick: 0,
            cur_color: 0,
            slot: defaults.variants[0].prime.to_slot(),
        }
    }

    /// One-time setup before the first frame
    ///
    /// Clears render state and loads the stored record once. The returned
    /// error is informational: on failure the defaults stay in place.
    pub fn init<S: Storage>(&mut self, storage: &mut S) -> Result<(), LoadError> {
        self.tick = 0;
        self.restart();
        self.load(storage)
    }

    /// Restore every field to the factory defaults
    pub fn reset(&mut self) {
        self.classifier =
            AccelerometerClassifier::new(self.defaults.acc_mode, self.defaults.acc_sensitivity);
        self.selector = VariantSelector::new(0);
        self.variants = self.defaults.variants;
        self.tick = 0;
        self.restart();
    }

    /// Apply the stored record, if there is a valid one
    ///
    /// On success the render state starts over. On any error the mode is
    /// left exactly as it was.
    pub fn load<S: Storage>(&mut self, storage: &mut S) -> Result<(), LoadError> {
        let mut buffer = [0u8; RECORD_SIZE];
        let record = storage
            .read(self.eeprom_addr, &mut buffer)
            .map_err(LoadError::from)
            .and_then(|()| ModeRecord::decode(&buffer));

        let record = match record {
            Ok(record) => record,
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Mode.load] keeping defaults at {:#06x}: {:?}",
                    self.eeprom_addr, error
                );
                return Err(error);
            }
        };

        self.classifier = AccelerometerClassifier::new(record.acc_mode, record.acc_sensitivity);
        self.selector = VariantSelector::new(record.cur_variant);
        self.variants = record.variants;
        self.tick = 0;
        self.restart();

        #[cfg(feature = "esp32-log")]
        println!("[Mode.load] loaded record at {:#06x}", self.eeprom_addr);
        Ok(())
    }

    /// Write the persistent state to storage
    pub fn save<S: Storage>(&self, storage: &mut S) -> Result<(), StorageError> {
        let result = storage.write(self.eeprom_addr, &self.record().encode());

        #[cfg(feature = "esp32-log")]
        println!("[Mode.save] record at {:#06x}: {:?}", self.eeprom_addr, result);
        result
    }

    /// Persistent state as a record
    pub fn record(&self) -> ModeRecord {
        ModeRecord {
            acc_mode: self.classifier.mode(),
            acc_sensitivity: self.classifier.sensitivity(),
            cur_variant: self.selector.variant(),
            variants: self.variants,
        }
    }

    /// Render one frame
    ///
    /// Advances `tick` and whichever counters the active primitive owns.
    pub fn render(&mut self) -> Rgb {
        let palette = &self.variants[usize::from(self.selector.variant())].palette;
        self.cur_color %= palette.num_colors();
        let color = self.slot.render(self.tick, palette, &mut self.cur_color);
        self.tick = self.tick.wrapping_add(1);
        color
    }

    /// Feed one accelerometer sample
    ///
    /// Invalid samples are ignored.
    pub fn update_acc(&mut self, sample: AccSample) {
        let motion = self.classifier.classify(sample);
        if self.selector.update(motion).is_some() {
            self.restart();
        }
    }

    pub const fn tick(&self) -> u32 {
        self.tick
    }

    pub const fn eeprom_addr(&self) -> u16 {
        self.eeprom_addr
    }

    pub const fn cur_color(&self) -> u8 {
        self.cur_color
    }

    pub fn counter0(&self) -> i8 {
        self.slot.counters()[0]
    }

    pub fn counter1(&self) -> i8 {
        self.slot.counters()[1]
    }

    pub const fn acc_mode(&self) -> AccMode {
        self.classifier.mode()
    }

    pub const fn acc_sensitivity(&self) -> AccSensitivity {
        self.classifier.sensitivity()
    }

    pub const fn acc_counter(&self) -> i16 {
        self.selector.counter()
    }

    /// Active variant, always 0 or 1
    pub const fn cur_variant(&self) -> u8 {
        self.selector.variant()
    }

    pub const fn defaults(&self) -> &ModeConfig {
        &self.defaults
    }

    /// Variant definition, `None` for an index other than 0 or 1
    pub fn variant(&self, variant: u8) -> Option<&VariantConfig> {
        self.variants.get(usize::from(variant))
    }

    /// Primitive of the active variant
    pub fn active_prime(&self) -> Prime {
        self.slot.id()
    }

    /// Snapshot of the render state
    pub fn render_state(&self) -> RenderState {
        let [counter0, counter1] = self.slot.counters();
        RenderState {
            tick: self.tick,
            cur_color: self.cur_color,
            counter0,
            counter1,
        }
    }

    /// Resume from a snapshot taken with [`Mode::render_state`]
    pub fn restore_render_state(&mut self, state: RenderState) {
        self.tick = state.tick;
        self.cur_color = state.cur_color;
        self.slot = self.slot.id().restore(state.counter0, state.counter1);
    }

    pub fn set_acc_mode(&mut self, mode: AccMode) {
        self.classifier.set_mode(mode);
        self.selector.reset_counter();
    }

    pub fn set_acc_sensitivity(&mut self, sensitivity: AccSensitivity) {
        self.classifier.set_sensitivity(sensitivity);
        self.selector.reset_counter();
    }

    /// Select the active variant directly
    pub fn set_variant(&mut self, variant: u8) -> Result<(), ConfigError> {
        if usize::from(variant) >= VARIANT_COUNT {
            return Err(ConfigError::InvalidVariant(variant));
        }
        self.selector.set_variant(variant);
        self.restart();
        Ok(())
    }

    pub fn set_prime(&mut self, variant: u8, prime: Prime) -> Result<(), ConfigError> {
        self.variant_mut(variant)?.prime = prime;
        self.restart_if_active(variant);
        Ok(())
    }

    pub fn set_palette_color(&mut self, variant: u8, slot: u8, color: u8) -> Result<(), ConfigError> {
        if !self.variant_mut(variant)?.palette.set_color(slot, color) {
            return Err(ConfigError::InvalidSlot(slot));
        }
        Ok(())
    }

    pub fn set_num_colors(&mut self, variant: u8, num_colors: u8) -> Result<(), ConfigError> {
        if !self.variant_mut(variant)?.palette.set_num_colors(num_colors) {
            return Err(ConfigError::InvalidColorCount(num_colors));
        }
        self.restart_if_active(variant);
        Ok(())
    }

    /// One-line description for debug output
    pub fn summary(&self) -> heapless::String<SUMMARY_CAPACITY> {
        let mut out = heapless::String::new();
        // Overflow only truncates the description.
        let _ = write!(
            out,
            "acc={} sens={} variant={}",
            self.acc_mode(),
            self.acc_sensitivity(),
            self.cur_variant()
        );
        for (index, variant) in self.variants.iter().enumerate() {
            let _ = write!(out, " | v{}: {} [", index, variant.prime);
            for (position, color) in variant.palette.colors().iter().enumerate() {
                let separator = if position == 0 { "" } else { " " };
                let _ = write!(out, "{}{:02x}", separator, color);
            }
            let _ = out.push(']');
        }
        out
    }

    fn variant_mut(&mut self, variant: u8) -> Result<&mut VariantConfig, ConfigError> {
        self.variants
            .get_mut(usize::from(variant))
            .ok_or(ConfigError::InvalidVariant(variant))
    }

    fn restart_if_active(&mut self, variant: u8) {
        if variant == self.selector.variant() {
            self.restart();
        }
    }

    /// Start the active primitive from scratch
    fn restart(&mut self) {
        self.cur_color = 0;
        self.slot = self.variants[usize::from(self.selector.variant())]
            .prime
            .to_slot();
    }
}
