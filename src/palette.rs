//! Fixed-capacity palette of packed colors

use crate::color::{Rgb, unpack_color};

/// Number of color slots in a palette
pub const PALETTE_SIZE: usize = 12;

/// Ordered list of up to [`PALETTE_SIZE`] packed colors
///
/// Only the first `num_colors` slots take part in rendering. The rest keep
/// whatever they held so that growing the count again restores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [u8; PALETTE_SIZE],
    num_colors: u8,
}

impl Palette {
    /// Create a palette from all slots and an active count
    ///
    /// Returns `None` unless `num_colors` is in `1..=12`.
    pub const fn new(colors: [u8; PALETTE_SIZE], num_colors: u8) -> Option<Self> {
        if num_colors == 0 || num_colors as usize > PALETTE_SIZE {
            return None;
        }
        Some(Self { colors, num_colors })
    }

    /// Create a palette from the given colors, leaving other slots blank
    ///
    /// Returns `None` for an empty slice or more than 12 colors.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_colors(colors: &[u8]) -> Option<Self> {
        if colors.is_empty() || colors.len() > PALETTE_SIZE {
            return None;
        }
        let mut slots = [0u8; PALETTE_SIZE];
        slots[..colors.len()].copy_from_slice(colors);
        Self::new(slots, colors.len() as u8)
    }

    /// Number of active colors, always in `1..=12`
    pub const fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// All slots, including inactive ones
    pub const fn slots(&self) -> &[u8; PALETTE_SIZE] {
        &self.colors
    }

    /// Active colors
    pub fn colors(&self) -> &[u8] {
        &self.colors[..self.num_colors as usize]
    }

    /// Packed color at `index`, wrapping around the active count
    #[inline]
    pub const fn color_at(&self, index: u8) -> u8 {
        self.colors[(index % self.num_colors) as usize]
    }

    /// RGB value of the color at `index`, wrapping around the active count
    #[inline]
    pub fn rgb_at(&self, index: u8) -> Rgb {
        unpack_color(self.color_at(index))
    }

    /// Index following `index`, wrapping around the active count
    #[inline]
    pub const fn advance(&self, index: u8) -> u8 {
        (index % self.num_colors + 1) % self.num_colors
    }

    /// Overwrite one slot
    ///
    /// Returns `false` if `slot` is outside the palette.
    pub fn set_color(&mut self, slot: u8, color: u8) -> bool {
        let Some(target) = self.colors.get_mut(slot as usize) else {
            return false;
        };
        *target = color;
        true
    }

    /// Change the active count
    ///
    /// Returns `false` and keeps the old count unless `num_colors` is in `1..=12`.
    pub fn set_num_colors(&mut self, num_colors: u8) -> bool {
        if num_colors == 0 || num_colors as usize > PALETTE_SIZE {
            return false;
        }
        self.num_colors = num_colors;
        true
    }
}
