/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Fold a sawtooth byte into a triangle wave (0..255..0)
///
/// `triangle8(0) == 0`, `triangle8(127) == 254`, `triangle8(255) == 0`.
#[inline]
pub const fn triangle8(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    j << 1
}

/// Map `step` of `steps` onto 0-255 progress
///
/// Returns 255 once `step >= steps`.
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(step: u8, steps: u8) -> u8 {
    if steps == 0 || step >= steps {
        return 255;
    }
    ((step as u16 * 255) / steps as u16) as u8
}

/// Advance an 8-bit xorshift generator
///
/// The state must be non-zero; zero is a fixed point and is mapped to 1.
#[inline]
pub const fn xorshift8(state: u8) -> u8 {
    let mut x = if state == 0 { 1 } else { state };
    x ^= x << 3;
    x ^= x >> 5;
    x ^= x << 1;
    if x == 0 { 1 } else { x }
}
