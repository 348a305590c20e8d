//! Hysteresis between the two variants

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Motion;

/// Consecutive same-direction events needed to move from neutral to a flip
pub const ACC_COUNTER_LIMIT: i16 = 4;

/// Debounces motion events into a variant choice
///
/// Each event moves the counter one step toward its direction. The counter
/// only accumulates toward the inactive variant: it stays in `0..=LIMIT`
/// while variant 0 is selected and in `-LIMIT..=0` while variant 1 is.
/// Reaching `+LIMIT` selects variant 1, reaching `-LIMIT` selects variant 0,
/// and every flip returns the counter to 0. From any decided state exactly
/// `LIMIT` consecutive events in the other direction flip the variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantSelector {
    counter: i16,
    variant: u8,
}

impl VariantSelector {
    /// Create a selector in the neutral position
    ///
    /// Any variant other than 0 is treated as 1.
    pub const fn new(variant: u8) -> Self {
        Self {
            counter: 0,
            variant: if variant == 0 { 0 } else { 1 },
        }
    }

    /// Currently selected variant, always 0 or 1
    pub const fn variant(&self) -> u8 {
        self.variant
    }

    /// Hysteresis accumulator
    pub const fn counter(&self) -> i16 {
        self.counter
    }

    /// Feed one classified sample
    ///
    /// Returns the new variant if this event flipped the selection.
    pub fn update(&mut self, motion: Option<Motion>) -> Option<u8> {
        let step = match motion? {
            Motion::Active => 1,
            Motion::Rest => -1,
        };
        let (low, high) = if self.variant == 0 {
            (0, ACC_COUNTER_LIMIT)
        } else {
            (-ACC_COUNTER_LIMIT, 0)
        };
        self.counter = self.counter.saturating_add(step).clamp(low, high);

        let target = match self.counter {
            ACC_COUNTER_LIMIT => 1,
            c if c == -ACC_COUNTER_LIMIT => 0,
            _ => return None,
        };

        #[cfg(feature = "esp32-log")]
        println!("[VariantSelector.update] switching to variant {}", target);
        self.variant = target;
        self.counter = 0;
        Some(target)
    }

    /// Select a variant directly and return the counter to neutral
    pub fn set_variant(&mut self, variant: u8) {
        *self = Self::new(variant);
    }

    /// Return the counter to neutral, keeping the variant
    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }
}
