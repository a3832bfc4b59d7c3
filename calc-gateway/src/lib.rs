//! HTTP API gateway for the calc service.
//!
//! Exposes the four arithmetic operations from `calc-core` as JSON
//! endpoints plus a static calculator page at the root route. Stateless:
//! every request is parsed, dispatched, and answered with no shared
//! mutable state.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod query;
pub mod routes;
