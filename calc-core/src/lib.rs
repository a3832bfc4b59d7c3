//! Domain-checked arithmetic operations for the calc service.
//!
//! Pure functions only: `sqrt`, `factorial`, `ln`, and `power`, each
//! rejecting out-of-domain input with a typed [`DomainError`] before any
//! computation happens. The HTTP layer lives in `calc-gateway`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod ops;

pub use error::DomainError;
pub use ops::{factorial, ln, power, sqrt};
