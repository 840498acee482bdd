//! Rabin–Karp: polynomial hash of the pattern against a window hash that is
//! rolled one symbol at a time. Hash equality only nominates a candidate; every
//! candidate is confirmed by direct comparison.

use serde::{Deserialize, Serialize};

use super::Symbol;
use crate::error::SeekError;

/// Polynomial hash parameters. With the default modulus of 101 collisions are
/// frequent, so the confirming comparison is load-bearing.
///
/// Only constructible through [`HashParams::new`] (or deserialization, which
/// goes through it), so every value keeps intermediate products below
/// `u64::MAX`: both factors are reduced below `modulus` before multiplying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHashParams")]
pub struct HashParams {
    base: u64,
    modulus: u64,
}

/// `[hash]` table as written, before range checks.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawHashParams {
    base: u64,
    modulus: u64,
}

impl Default for RawHashParams {
    fn default() -> Self {
        let HashParams { base, modulus } = HashParams::DEFAULT;
        Self { base, modulus }
    }
}

impl TryFrom<RawHashParams> for HashParams {
    type Error = SeekError;

    fn try_from(raw: RawHashParams) -> Result<Self, SeekError> {
        Self::new(raw.base, raw.modulus)
    }
}

impl HashParams {
    pub const DEFAULT: HashParams = HashParams {
        base: 256,
        modulus: 101,
    };

    /// `modulus` must be in `2..=u32::MAX` and `base` at least 1.
    pub fn new(base: u64, modulus: u64) -> Result<Self, SeekError> {
        if !(2..=u64::from(u32::MAX)).contains(&modulus) {
            return Err(SeekError::InvalidConfig {
                reason: format!("hash modulus must be in 2..={}, got {modulus}", u32::MAX),
            });
        }
        if base == 0 {
            return Err(SeekError::InvalidConfig {
                reason: "hash base must be at least 1".into(),
            });
        }
        Ok(Self { base, modulus })
    }

    #[must_use]
    pub fn base(self) -> u64 {
        self.base
    }

    #[must_use]
    pub fn modulus(self) -> u64 {
        self.modulus
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `base^exp mod modulus` by square-and-multiply.
fn pow_mod(base: u64, mut exp: usize, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    let mut factor = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * factor % modulus;
        }
        factor = factor * factor % modulus;
        exp >>= 1;
    }
    result
}

/// `Σ ord(s[k]) · base^(len-1-k) mod modulus`, evaluated with Horner's scheme.
pub fn polynomial_hash<S: Symbol>(s: &[S], params: HashParams) -> u64 {
    let HashParams { base, modulus } = params;
    let base = base % modulus;
    s.iter().fold(0, |acc, &symbol| {
        (acc * base + symbol.ordinal() % modulus) % modulus
    })
}

/// First occurrence of `pattern` in `text` with the default hash parameters.
pub fn find<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    find_with(text, pattern, HashParams::DEFAULT)
}

/// First occurrence of `pattern` in `text`. Empty pattern matches at 0.
pub fn find_with<S: Symbol>(text: &[S], pattern: &[S], params: HashParams) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }
    if m > text.len() {
        return None;
    }

    let HashParams { base, modulus } = params;
    let base = base % modulus;
    let pattern_hash = polynomial_hash(pattern, params);
    let mut window_hash = polynomial_hash(&text[..m], params);
    let multiplier = pow_mod(base, m - 1, modulus);
    let last = text.len() - m;

    for i in 0..=last {
        if window_hash == pattern_hash && text[i..i + m] == *pattern {
            return Some(i);
        }

        if i < last {
            let outgoing = text[i].ordinal() % modulus * multiplier % modulus;
            let incoming = text[i + m].ordinal() % modulus;
            // Add modulus before subtracting so the value never goes negative
            let removed = (window_hash + modulus - outgoing) % modulus;
            window_hash = (removed * base + incoming) % modulus;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Per-term definition with modular exponentiation for every position.
    fn per_term_hash<S: Symbol>(s: &[S], params: HashParams) -> u64 {
        let n = s.len();
        s.iter().enumerate().fold(0, |acc, (k, &symbol)| {
            let power = pow_mod(params.base, n - 1 - k, params.modulus);
            (acc + symbol.ordinal() % params.modulus * power) % params.modulus
        })
    }

    #[test]
    fn horner_matches_per_term_definition() {
        let samples: [&[u8]; 4] = [b"", b"a", b"abc", b"the quick brown fox"];
        for s in samples {
            assert_eq!(
                polynomial_hash(s, HashParams::DEFAULT),
                per_term_hash(s, HashParams::DEFAULT)
            );
        }
        let text: Vec<char> = "Теоре́ма Піфаго́ра".chars().collect();
        let params = HashParams::new(1_000_003, 1_000_000_007).unwrap();
        assert_eq!(polynomial_hash(&text, params), per_term_hash(&text, params));
    }

    #[test]
    fn known_hash_values() {
        assert_eq!(polynomial_hash(b"abc", HashParams::DEFAULT), 90);
        assert_eq!(polynomial_hash::<u8>(b"", HashParams::DEFAULT), 0);
    }

    #[test]
    fn pow_mod_edges() {
        assert_eq!(pow_mod(256, 0, 101), 1);
        assert_eq!(pow_mod(256, 1, 101), 54);
        assert_eq!(pow_mod(2, 10, 1_000), 24);
    }

    #[test]
    fn collision_is_rejected_by_comparison() {
        // 'a'·256 + 'z' == 'b'·256 + 'D' (mod 101)
        let params = HashParams::DEFAULT;
        assert_eq!(polynomial_hash(b"az", params), polynomial_hash(b"bD", params));
        assert_eq!(find(b"bD", b"az"), None);
        assert_eq!(find(b"xxbDxx", b"az"), None);
        assert_eq!(find(b"xxbDaz", b"az"), Some(4));
    }

    #[test]
    fn rolled_hash_equals_fresh_hash() {
        // A match deep in the text is only found if every roll stays exact
        let mut text = b"lorem ipsum dolor sit amet ".repeat(40);
        text.extend_from_slice(b"consectetur");
        let expected = text.len() - b"consectetur".len();
        assert_eq!(find(&text, b"consectetur"), Some(expected));
    }

    #[test]
    fn large_ordinals_stay_in_range() {
        let text: Vec<char> = "🦀🦀🦀🦐🦀".chars().collect();
        let pattern: Vec<char> = "🦐🦀".chars().collect();
        assert_eq!(find(&text, &pattern), Some(3));

        let max = u64::from(u32::MAX);
        let params = HashParams::new(max, max).unwrap();
        assert_eq!(find_with(&text, &pattern, params), Some(3));
    }

    #[test]
    fn degenerate_params_cannot_be_built() {
        assert!(HashParams::new(256, 0).is_err());
        assert!(HashParams::new(256, 1).is_err());
        assert!(HashParams::new(0, 101).is_err());
        assert!(HashParams::new(256, u64::from(u32::MAX) + 1).is_err());
        assert!(HashParams::new(256, u64::MAX).is_err());
        assert_eq!(HashParams::new(256, 101).unwrap(), HashParams::DEFAULT);
    }

    #[test]
    fn deserialization_goes_through_range_checks() {
        #[derive(Deserialize)]
        struct Wrapper {
            hash: HashParams,
        }
        let parse = |s: &str| toml::from_str::<Wrapper>(s).map(|w| w.hash);

        assert_eq!(parse("[hash]\nbase = 31").unwrap().base(), 31);
        assert_eq!(parse("[hash]\nbase = 31").unwrap().modulus(), 101);
        assert!(parse("[hash]\nmodulus = 0").is_err());
        assert!(parse("[hash]\nbase = 0").is_err());
        assert!(parse("[hash]\nmodulo = 7").is_err());
    }
}
