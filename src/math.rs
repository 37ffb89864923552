//! Integer brightness math
//!
//! All helpers are pure and avoid division on the hot path; the scale
//! functions use the shift trick so that scaling by the domain maximum is
//! an exact identity.

/// Full brightness in the 8-bit domain.
pub const FULL: u8 = 255;
/// Zero brightness.
pub const ZERO: u8 = 0;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Guarantees `scale8(0, f) == 0` for all `f` and `scale8(x, 255) == x`
/// for all `x`.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, factor: u8) -> u8 {
    ((value as u16 * (1 + factor as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, factor: u16) -> u16 {
    ((value as u32 * (1 + factor as u32)) >> 16) as u16
}

/// Map `value` (assumed in `[0, 255]`) into the range `[a, b]`
///
/// Expects `a <= b`; a degenerate range with `a > b` collapses to `a`.
/// The identity case `(a, b) == (0, 255)` returns `value` unchanged.
#[inline]
pub const fn lerp8(value: u8, a: u8, b: u8) -> u8 {
    if a == 0 && b == 255 {
        return value;
    }
    a + scale8(value, b.saturating_sub(a))
}

/// Map `value` (assumed in `[0, 65535]`) into the range `[a, b]`
///
/// Expects `a <= b`; a degenerate range with `a > b` collapses to `a`.
#[inline]
pub const fn lerp16(value: u16, a: u16, b: u16) -> u16 {
    if a == 0 && b == 65535 {
        return value;
    }
    a + scale16(value, b.saturating_sub(a))
}

/// Widen an 8-bit brightness value to the 16-bit domain
///
/// Replicates the byte so that 0 maps to 0 and 255 maps to 65535. This is
/// the only sanctioned 8-to-16 conversion; see [`narrow16`] for the
/// inverse.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn widen8(value: u8) -> u16 {
    ((value as u16) << 8) | value as u16
}

/// Narrow a 16-bit brightness value to the 8-bit domain by truncation
///
/// Inverse of [`widen8`]: `narrow16(widen8(v)) == v` for all `v`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn narrow16(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Pre-calculated fade-on samples of
/// `y(t) = (exp(sin((t - period/2) * PI / period)) - 1/e) * 108`
/// taken at t = 0, 32, ..., 256 over a 0..255 domain.
///
/// Fade-off and breathe curves are derived from this table, see
/// [`fade_on`].
const FADE_ON_TABLE: [u8; 9] = [0, 3, 13, 33, 68, 118, 179, 232, 255];

/// Evaluate the fade-on curve at time `t` of the given period
///
/// Approximates the exponential-sine curve by linear interpolation between
/// the table samples. The last tick of the period (and everything past it,
/// including a degenerate zero period) yields exactly full brightness, so
/// the curve's terminal value never suffers interpolation error.
#[allow(clippy::cast_possible_truncation)]
pub fn fade_on(t: u32, period: u16) -> u8 {
    if t >= u32::from(period).saturating_sub(1) {
        return FULL;
    }

    // scale t according to the period into 0..255
    let t = (((t << 8) / u32::from(period)) & 0xff) as u16;
    let i = (t >> 5) as usize; // i is in 0..=7
    let y0 = u16::from(FADE_ON_TABLE[i]);
    let y1 = u16::from(FADE_ON_TABLE[i + 1]);
    let x0 = (i as u16) << 5;

    // linear segment y(t) = m*t + b with m = (y1-y0)/32
    ((((t - x0) * (y1 - y0)) >> 5) + y0) as u8
}
