//! Fuzz target: factorial over every f64 bit pattern.
//!
//! The domain check must reject NaN, infinities, negatives, and
//! fractions with a typed error; no input may panic or overflow.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|bits: u64| {
    let _ = calc_core::factorial(f64::from_bits(bits));
});
