//! Packed color table
//!
//! Palettes store colors as a single byte. The low six bits select one of
//! 64 base colors, the high two bits select a shade:
//!
//! | bits  | meaning                                   |
//! |-------|-------------------------------------------|
//! | 7..6  | shade: 0 full, 1 half, 2 quarter, 3 eighth |
//! | 5..0  | base color slot                           |
//!
//! Base slots: `0` blank, `1` white, `2..=49` a 48-step hue wheel,
//! `50..=63` pastel tints. The whole 256-entry table is built at compile
//! time and shared by every mode.

use crate::color::Rgb;

pub const BLANK: u8 = 0;
pub const WHITE: u8 = 1;

pub const HUE_START: u8 = 2;
pub const HUE_COUNT: u8 = 48;
pub const PASTEL_START: u8 = HUE_START + HUE_COUNT;
pub const PASTEL_COUNT: u8 = 64 - PASTEL_START;

const SLOT_MASK: u8 = 0x3F;
const SHADE_SHIFT: u8 = 6;

/// Every packed color resolved to RGB
pub static COLOR_TABLE: [Rgb; 256] = build_table();

/// Resolve a packed color byte to RGB
///
/// Total: every byte maps to a color.
#[inline]
pub fn unpack_color(color: u8) -> Rgb {
    COLOR_TABLE[color as usize]
}

/// Pack a base slot and shade (0-3) into a color byte
///
/// Out-of-range inputs are masked.
#[inline]
pub const fn pack_color(slot: u8, shade: u8) -> u8 {
    ((shade & 0x03) << SHADE_SHIFT) | (slot & SLOT_MASK)
}

/// Three-sector spectrum, 0-255 hue circle
#[allow(clippy::cast_possible_truncation)]
const fn spectrum(hue: u8) -> Rgb {
    let sector = hue / 86;
    let offset = (hue % 86) as u16 * 3;
    let rise = if offset > 255 { 255 } else { offset as u8 };
    let fall = 255 - rise;
    match sector {
        0 => Rgb { r: fall, g: rise, b: 0 },
        1 => Rgb { r: 0, g: fall, b: rise },
        _ => Rgb { r: rise, g: 0, b: fall },
    }
}

const fn tint(color: Rgb) -> Rgb {
    Rgb {
        r: (color.r >> 1) + 128,
        g: (color.g >> 1) + 128,
        b: (color.b >> 1) + 128,
    }
}

const fn shade(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: color.r >> level,
        g: color.g >> level,
        b: color.b >> level,
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn base_color(slot: u8) -> Rgb {
    if slot == BLANK {
        Rgb { r: 0, g: 0, b: 0 }
    } else if slot == WHITE {
        Rgb {
            r: 255,
            g: 255,
            b: 255,
        }
    } else if slot < PASTEL_START {
        let step = (slot - HUE_START) as u16;
        spectrum(((step * 256) / HUE_COUNT as u16) as u8)
    } else {
        let step = (slot - PASTEL_START) as u16;
        tint(spectrum(((step * 256) / PASTEL_COUNT as u16) as u8))
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn build_table() -> [Rgb; 256] {
    let mut table = [Rgb { r: 0, g: 0, b: 0 }; 256];
    let mut i = 0usize;
    while i < 256 {
        let packed = i as u8;
        table[i] = shade(base_color(packed & SLOT_MASK), packed >> SHADE_SHIFT);
        i += 1;
    }
    table
}
