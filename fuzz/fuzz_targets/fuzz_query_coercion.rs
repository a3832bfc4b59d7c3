//! Fuzz target: query parameter coercion.
//!
//! Verifies that arbitrary parameter text fed to the float coercion path
//! never causes panics. Errors are expected and fine.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = calc_gateway::query::require_f64("x", Some(text));
    }
});
