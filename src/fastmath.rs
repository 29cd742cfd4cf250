//! Fast scalar approximations of common float functions.
//!
//! Graphics-grade replacements built from IEEE-754 bit manipulation seeds
//! refined by a fixed number of Newton/Babylonian steps, plus short
//! polynomial kernels on range-reduced arguments. Accuracy is loose by
//! design (roughly 1e-3 relative or better on sane inputs); the rest of
//! the crate keeps using the exact `std` functions and callers opt into
//! these per call site through the plain `fn(T) -> T` interfaces.
//!
//! Domain notes: the bit-seed functions expect finite positive inputs;
//! `exp_fast` degrades below roughly -87 (subnormal territory) and the
//! trig range reduction loses precision for very large magnitudes.

use std::f32::consts::{FRAC_2_PI, FRAC_PI_2, LN_2, LOG2_E};

const SQRT_MAGIC: u32 = 0x1FBD_1DF5;
const RSQRT_MAGIC: u32 = 0x5F37_59DF;
const RSQRT_MAGIC_64: u64 = 0x5FE6_EB50_C7B5_37A9;

/// Absolute value by clearing the sign bit.
#[inline]
pub fn abs_bits(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & 0x7FFF_FFFF)
}

/// Sign of `x` as `+-1.0`, extracted from the sign bit (returns `1.0` for
/// `+0.0` and `-1.0` for `-0.0`).
#[inline]
pub fn sgn_bits(x: f32) -> f32 {
    f32::from_bits((x.to_bits() & 0x8000_0000) | 0x3F80_0000)
}

/// Square root from a bit-shift seed plus two Babylonian refinements.
pub fn sqrt_fast(x: f32) -> f32 {
    let n = 0.5 * x;
    let mut y = f32::from_bits(SQRT_MAGIC.wrapping_add(x.to_bits() >> 1));
    y = 0.5 * y + n / y;
    y = 0.5 * y + n / y;
    y
}

/// Reciprocal square root from the classic magic-constant seed plus two
/// Newton refinements.
pub fn rsqrt_fast(x: f32) -> f32 {
    let n = 0.5 * x;
    let mut y = f32::from_bits(RSQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    y = y * (1.5 - n * y * y);
    y = y * (1.5 - n * y * y);
    y
}

/// 64-bit variant of [`rsqrt_fast`].
pub fn rsqrt_fast_f64(x: f64) -> f64 {
    let n = 0.5 * x;
    let mut y = f64::from_bits(RSQRT_MAGIC_64.wrapping_sub(x.to_bits() >> 1));
    y = y * (1.5 - n * y * y);
    y = y * (1.5 - n * y * y);
    y
}

// Odd polynomial for sin on [-pi/2, pi/2]: a Taylor kernel evaluated at
// t/9 and unfolded twice through the triple-angle identity
// sin(3h) = sin(h) * (3 - 4 sin^2(h)).
fn sin_kernel(t: f32) -> f32 {
    let h = t / 9.0;
    let h2 = h * h;
    let l = (((0.000_002_755_7 * h2 - 0.000_198_41) * h2 + 0.008_333_3) * h2 - 0.166_666_6)
        * h
        * h2
        + h;
    let j = l * (3.0 - 4.0 * l * l);
    j * (3.0 - 4.0 * j * j)
}

/// Sine via quadrant reduction and the polynomial kernel.
pub fn sin_fast(x: f32) -> f32 {
    let k = abs_bits(x);
    let f = k * FRAC_2_PI;
    let q = f as u32;
    let r = (f - q as f32) * FRAC_PI_2;
    let theta = if q & 1 == 0 { r } else { FRAC_PI_2 - r };
    let y = if q & 2 == 0 {
        sin_kernel(theta)
    } else {
        -sin_kernel(theta)
    };
    if x < 0.0 {
        -y
    } else {
        y
    }
}

/// Cosine as a phase-shifted [`sin_fast`].
pub fn cos_fast(x: f32) -> f32 {
    sin_fast(FRAC_PI_2 - x)
}

// Truncated Taylor series for e^b with |b| < ln 2.
fn exp_kernel(b: f32) -> f32 {
    1.0 + b * (1.0 + b * (0.5 + b * (0.166_666 + b * (0.041_666_6 + b * (0.008_333_3 + b * 0.001_388_8)))))
}

/// Exponential: split into an exact power of two (exponent bits) times a
/// polynomial on the fractional remainder.
pub fn exp_fast(x: f32) -> f32 {
    let t = x * LOG2_E;
    let i = t as i32;
    let f = t - i as f32;
    let pow2 = f32::from_bits(((i + 127) as u32) << 23);
    pow2 * exp_kernel(LN_2 * f)
}

// atanh series for ln(m), m in [1, 2): ln(m) = 2 atanh((m-1)/(m+1)).
fn ln_kernel(t: f32) -> f32 {
    let t2 = t * t;
    2.0 * (t + t2 * t * (0.333_333 + t2 * (0.2 + t2 * (0.142_857 + t2 * (0.111_111 + t2 * 0.090_909)))))
}

/// Natural logarithm: exponent bits give the integer part in units of
/// ln 2, the mantissa goes through the atanh series.
pub fn ln_fast(x: f32) -> f32 {
    let i = x.to_bits();
    let e = ((i >> 23) as i32) - 127;
    let m = f32::from_bits((i & 0x007F_FFFF) | 0x3F80_0000);
    let t = (m - 1.0) / (m + 1.0);
    LN_2 * e as f32 + ln_kernel(t)
}
