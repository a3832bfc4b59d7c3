//! The four arithmetic operations and their domain checks.
//!
//! Every function here is pure and synchronous. Validation happens before
//! computation; an invalid input never reaches the underlying math call.

use crate::error::DomainError;

/// Non-negative real square root of `x`.
///
/// # Errors
/// Returns [`DomainError::NegativeSqrt`] if `x < 0`.
pub fn sqrt(x: f64) -> Result<f64, DomainError> {
    if x < 0.0 {
        return Err(DomainError::NegativeSqrt { value: x });
    }
    Ok(x.sqrt())
}

/// Exact factorial of an integral-valued float.
///
/// Accepts `5.0` as well as values coerced from integer query strings.
///
/// # Errors
/// Returns [`DomainError::FactorialDomain`] if `n` is negative,
/// non-finite, or has a fractional part, and
/// [`DomainError::FactorialOverflow`] if `n!` exceeds `u128::MAX`
/// (first hit at `n = 35`).
pub fn factorial(n: f64) -> Result<u128, DomainError> {
    if !n.is_finite() || n.fract() != 0.0 || n < 0.0 {
        return Err(DomainError::FactorialDomain { value: n });
    }
    // Saturating cast is fine: anything above 34 overflows below anyway.
    // The error carries `n`, not the cast, so huge arguments report
    // themselves rather than u64::MAX.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "checked integral and non-negative above")]
    let whole = n as u64;
    let mut acc: u128 = 1;
    for k in 2..=u128::from(whole) {
        acc = acc
            .checked_mul(k)
            .ok_or(DomainError::FactorialOverflow { value: n })?;
    }
    Ok(acc)
}

/// Natural logarithm of `x`.
///
/// # Errors
/// Returns [`DomainError::NonPositiveLn`] if `x <= 0`.
pub fn ln(x: f64) -> Result<f64, DomainError> {
    if x <= 0.0 {
        return Err(DomainError::NonPositiveLn { value: x });
    }
    Ok(x.ln())
}

/// `x` raised to the power `b` with standard floating-point semantics.
///
/// Performs no validation: undefined combinations (negative base with
/// fractional exponent, `0^-1`, ...) propagate `powf`'s NaN/infinity
/// results unchanged.
#[must_use]
pub fn power(x: f64, b: f64) -> f64 {
    x.powf(b)
}
