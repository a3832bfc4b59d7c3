/// Errors produced by the `calc-core` crate.
///
/// Each variant carries the rejected input; the `Display` message is the
/// text surfaced to API clients, so wording changes here are visible on
/// the wire.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[non_exhaustive]
pub enum DomainError {
    /// A negative argument was passed to `sqrt`.
    #[error("sqrt is undefined for negative numbers")]
    NegativeSqrt { value: f64 },

    /// A negative, non-finite, or non-integral argument was passed to
    /// `factorial`.
    #[error("factorial is for non-negative integers only")]
    FactorialDomain { value: f64 },

    /// The factorial result exceeds `u128::MAX` (any argument above 34).
    /// Carries the argument as passed, not a truncated cast of it.
    #[error("factorial of {value} does not fit in a 128-bit integer")]
    FactorialOverflow { value: f64 },

    /// A non-positive argument was passed to `ln`.
    #[error("ln is defined for positive numbers only")]
    NonPositiveLn { value: f64 },
}
