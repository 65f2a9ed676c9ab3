//! # Arithmetic Core
//!
//! Pure, stateless functions behind every calculator operation. Nothing here
//! records history or reads settings; callers pass the angle mode explicitly
//! and decide whether to round.
//!
//! Functions with a restricted domain return a [`CalcError`] instead of a
//! silent `NaN`:
//!
//! | Function | Fails with |
//! |----------|------------|
//! | [`divide`] | `DivisionByZero` when `b == 0` |
//! | [`square_root`] | `NegativeRoot` when `x < 0` |
//! | [`factorial`] | `NegativeFactorial`, `NonIntegerFactorial` |
//! | [`asin`], [`acos`] | `DomainError` outside `[-1, 1]` |
//! | [`log10`], [`ln`] | `NonPositiveLogarithm` when `x <= 0` |
//! | [`log_base`] | `InvalidLogBase`, `NonPositiveLogarithm` |
//!
//! `NaN` arguments are not rejected: comparisons against `NaN` are false, so a
//! `NaN` passes every guard and propagates into the result.
//!
//! ```rust
//! use calcshell::arithmetic;
//! use calcshell::AngleMode;
//!
//! assert_eq!(arithmetic::add(10.0, 5.0), 15.0);
//! assert!(arithmetic::divide(1.0, 0.0).is_err());
//! let half = arithmetic::sin(30.0, AngleMode::Degrees);
//! assert_eq!(arithmetic::round(half, 10), 0.5);
//! ```

use crate::calcshell::error::{CalcError, CalcResult};
use crate::calcshell::settings::AngleMode;

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, rejecting a zero divisor.
pub fn divide(a: f64, b: f64) -> CalcResult {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Truncating remainder: the result takes the sign of `a`.
pub fn modulus(a: f64, b: f64) -> f64 {
    a % b
}

/// `base` raised to `exponent`.
///
/// A negative base with a fractional exponent yields `NaN`; overflow yields
/// an infinity. Both propagate without an error.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub fn square_root(x: f64) -> CalcResult {
    if x < 0.0 {
        return Err(CalcError::NegativeRoot(x));
    }
    Ok(x.sqrt())
}

/// Real cube root, defined for negative inputs too.
pub fn cube_root(x: f64) -> f64 {
    x.cbrt()
}

/// Iterative product `1 * 2 * ... * n`.
pub fn factorial(n: f64) -> CalcResult {
    if n < 0.0 {
        return Err(CalcError::NegativeFactorial(n));
    }
    if n.fract() != 0.0 {
        // also catches NaN and infinities, whose fract() is NaN
        return Err(CalcError::NonIntegerFactorial(n));
    }

    let mut result = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    Ok(result)
}

pub fn to_radians(angle: f64, mode: AngleMode) -> f64 {
    match mode {
        AngleMode::Degrees => angle * (PI / 180.0),
        AngleMode::Radians => angle,
    }
}

pub fn from_radians(radians: f64, mode: AngleMode) -> f64 {
    match mode {
        AngleMode::Degrees => radians * (180.0 / PI),
        AngleMode::Radians => radians,
    }
}

pub fn sin(angle: f64, mode: AngleMode) -> f64 {
    to_radians(angle, mode).sin()
}

pub fn cos(angle: f64, mode: AngleMode) -> f64 {
    to_radians(angle, mode).cos()
}

pub fn tan(angle: f64, mode: AngleMode) -> f64 {
    to_radians(angle, mode).tan()
}

fn check_unit_interval(function: &str, x: f64) -> Result<(), CalcError> {
    if x < -1.0 || x > 1.0 {
        return Err(CalcError::DomainError {
            function: function.to_string(),
            value: x,
        });
    }
    Ok(())
}

pub fn asin(x: f64, mode: AngleMode) -> CalcResult {
    check_unit_interval("asin", x)?;
    Ok(from_radians(x.asin(), mode))
}

pub fn acos(x: f64, mode: AngleMode) -> CalcResult {
    check_unit_interval("acos", x)?;
    Ok(from_radians(x.acos(), mode))
}

pub fn atan(x: f64, mode: AngleMode) -> f64 {
    from_radians(x.atan(), mode)
}

pub fn log10(x: f64) -> CalcResult {
    if x <= 0.0 {
        return Err(CalcError::NonPositiveLogarithm(x));
    }
    Ok(x.log10())
}

pub fn ln(x: f64) -> CalcResult {
    if x <= 0.0 {
        return Err(CalcError::NonPositiveLogarithm(x));
    }
    Ok(x.ln())
}

/// Logarithm of `x` in an arbitrary `base`, computed as `ln(x) / ln(base)`.
pub fn log_base(base: f64, x: f64) -> CalcResult {
    if base <= 0.0 || base == 1.0 {
        return Err(CalcError::InvalidLogBase(base));
    }
    if x <= 0.0 {
        return Err(CalcError::NonPositiveLogarithm(x));
    }
    Ok(x.ln() / base.ln())
}

/// Round to `precision` decimal digits, ties away from zero.
///
/// Values that are not finite, or whose scaled form would overflow, are
/// returned unchanged.
pub fn round(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
