//! Mathematical utilities for solar and prayer time calculations.

#![allow(clippy::many_single_char_names)]

/// Degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps an angle into [0°, 360°).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized >= 0.0 || normalized.is_nan() {
        return normalized;
    }
    // tiny negative remainders would otherwise round up to 360
    let wrapped = normalized + 360.0;
    if wrapped < 360.0 { wrapped } else { 0.0 }
}

/// Wraps an angle into (-180°, 180°].
pub fn normalize_degrees_pm_180(degrees: f64) -> f64 {
    let normalized = normalize_degrees_0_to_360(degrees);
    if normalized > 180.0 {
        normalized - 360.0
    } else {
        normalized
    }
}

/// Normalizes a value to the range [0, 1).
pub fn normalize_to_unit_range(value: f64) -> f64 {
    let limited = value - floor(value);
    if limited < 0.0 { limited + 1.0 } else { limited }
}

/// Evaluates `coeffs[0] + coeffs[1] x + coeffs[2] x² + ...` by Horner's rule.
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .iter()
        .rev()
        .fold(0.0, |acc, &coefficient| mul_add(acc, x, coefficient))
}

/// Three-point interpolation (Meeus, Astronomical Algorithms, eq. 3.3).
///
/// `y2` is the central tabular value, `y1` and `y3` the previous and next values, and `n` the
/// interpolating factor measured from the central argument.
pub fn interpolate(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    y2 + (n * mul_add(c, n, a + b)) / 2.0
}

/// Three-point interpolation for angles, taking the short way across the 0°/360° seam.
pub fn interpolate_angles(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = normalize_degrees_pm_180(y2 - y1);
    let b = normalize_degrees_pm_180(y3 - y2);
    let c = b - a;
    y2 + (n * mul_add(c, n, a + b)) / 2.0
}

/// Sine of an angle in radians.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Cosine of an angle in radians.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Tangent of an angle in radians.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Arcsine in radians; NaN outside [-1, 1].
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Arccosine in radians; NaN outside [-1, 1].
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Arctangent in radians.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Four-quadrant arctangent of `y / x` in radians.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Largest integer not greater than `x`.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Smallest integer not less than `x`.
#[inline]
pub fn ceil(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ceil();

    #[cfg(not(feature = "std"))]
    return libm::ceil(x);
}

/// Nearest integer, halves away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

/// Absolute value.
#[inline]
pub fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

/// Fused `x * a + b`.
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}
