//! Seeded pseudo-randomness for reproducible jitter
//!
//! Both primitives are defined bit-for-bit so other ports of the engine can
//! reproduce the same tree layout:
//!
//! - [`stable_hash`]: `h = h * 31 + unit` over the UTF-16 code units of the
//!   key with wrapping 32-bit signed arithmetic, then the absolute value.
//! - [`SeededRandom`]: linear congruential generator
//!   `state = (state * 9301 + 49297) mod 233280`, yielding `state / 233280`.

/// LCG multiplier
pub const LCG_MULTIPLIER: u64 = 9301;

/// LCG increment
pub const LCG_INCREMENT: u64 = 49297;

/// LCG modulus
pub const LCG_MODULUS: u64 = 233_280;

/// Stable 32-bit string hash (absolute value of the signed result)
///
/// # Examples
///
/// ```
/// use grove_domain::stable_hash;
///
/// assert_eq!(stable_hash("hello"), 99_162_322);
/// ```
pub fn stable_hash(key: &str) -> u32 {
    let hash = key.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// Pure linear congruential generator producing floats in [0, 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Create a generator from an integer seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator seeded from the stable hash of `key`
    pub fn from_key(key: &str) -> Self {
        Self::new(u64::from(stable_hash(key)))
    }

    /// Advance and return the next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        // Reduce first so the multiply cannot overflow for any u64 seed
        let state = self.state % LCG_MODULUS;
        self.state = (state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every draw lies in [0, 1)
        #[test]
        fn test_values_in_unit_interval(seed in any::<u64>(), draws in 1..64usize) {
            let rng = SeededRandom::new(seed);
            for value in rng.take(draws) {
                prop_assert!((0.0..1.0).contains(&value));
            }
        }

        /// Property: appending a unit extends the hash as h * 31 + unit
        #[test]
        fn test_hash_extends_incrementally(key in "[a-z0-9-]{0,24}", last in "[a-z0-9]") {
            let prefix = key.encode_utf16().fold(0i32, |h, u| {
                h.wrapping_mul(31).wrapping_add(i32::from(u))
            });
            let unit = last.encode_utf16().next().unwrap();
            let expected = prefix.wrapping_mul(31).wrapping_add(i32::from(unit));
            prop_assert_eq!(stable_hash(&format!("{key}{last}")), expected.unsigned_abs());
        }
    }
}
