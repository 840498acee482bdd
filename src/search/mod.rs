pub mod bad_char;
pub mod prefix;
pub mod rolling;

use std::hash::Hash;

use crate::types::Algorithm;
use rolling::HashParams;

/// A comparable unit of text. The rolling hash needs an integer ordinal; the
/// shift table needs `Hash`.
pub trait Symbol: Copy + Eq + Hash {
    fn ordinal(self) -> u64;
}

impl Symbol for u8 {
    #[inline]
    fn ordinal(self) -> u64 {
        u64::from(self)
    }
}

impl Symbol for char {
    #[inline]
    fn ordinal(self) -> u64 {
        u64::from(u32::from(self))
    }
}

/// Signature shared by every matcher: first offset of `pattern` in `text`.
pub type FindFn<S> = fn(&[S], &[S]) -> Option<usize>;

impl Algorithm {
    /// The matcher function for this algorithm.
    #[must_use]
    pub fn matcher<S: Symbol>(self) -> FindFn<S> {
        match self {
            Self::Kmp => prefix::find,
            Self::BoyerMoore => bad_char::find,
            Self::RabinKarp => rolling::find,
        }
    }

    /// First occurrence of `pattern` in `text`, or `None`.
    /// An empty pattern matches at offset 0 for every algorithm.
    pub fn find<S: Symbol>(self, text: &[S], pattern: &[S]) -> Option<usize> {
        (self.matcher())(text, pattern)
    }

    /// Like [`Algorithm::find`], with explicit rolling-hash parameters.
    /// Only Rabin–Karp reads them.
    pub fn find_with<S: Symbol>(
        self,
        text: &[S],
        pattern: &[S],
        params: HashParams,
    ) -> Option<usize> {
        match self {
            Self::RabinKarp => rolling::find_with(text, pattern, params),
            _ => self.find(text, pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Every matcher must give the same answer, and that answer must be the
    /// first window equal to the pattern.
    fn assert_agree<S: Symbol + std::fmt::Debug>(text: &[S], pattern: &[S]) -> Option<usize> {
        let expected = if pattern.is_empty() {
            Some(0)
        } else {
            text.windows(pattern.len()).position(|w| w == pattern)
        };
        for alg in Algorithm::ALL {
            assert_eq!(
                alg.find(text, pattern),
                expected,
                "{alg} on text={text:?} pattern={pattern:?}"
            );
        }
        expected
    }

    #[test]
    fn pattern_longer_than_text() {
        assert_eq!(assert_agree(b"ab", b"abc"), None);
    }

    #[test]
    fn exact_match() {
        assert_eq!(assert_agree(b"abc", b"abc"), Some(0));
    }

    #[test]
    fn match_at_end() {
        assert_eq!(assert_agree(b"xxabc", b"abc"), Some(2));
    }

    #[test]
    fn no_match() {
        assert_eq!(assert_agree(b"aaaa", b"b"), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(assert_agree(b"abcabc", b"abc"), Some(0));
        assert_eq!(assert_agree(b"aaaa", b"aa"), Some(0));
        assert_eq!(assert_agree(b"xyzabcabc", b"abc"), Some(3));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(assert_agree(b"hello", b""), Some(0));
        assert_eq!(assert_agree::<u8>(b"", b""), Some(0));
        assert_eq!(assert_agree(b"", b"a"), None);
    }

    #[test]
    fn hash_collision_is_not_a_match() {
        // "az" and "bD" collide under base 256, modulus 101
        assert_eq!(
            rolling::polynomial_hash(b"az", HashParams::DEFAULT),
            rolling::polynomial_hash(b"bD", HashParams::DEFAULT)
        );
        assert_eq!(assert_agree(b"bD", b"az"), None);
        assert_eq!(assert_agree(b"bDbDbD", b"az"), None);
    }

    #[test]
    fn binary_and_case_sensitive() {
        assert_eq!(assert_agree(b"\x00\x01\x02\x03", b"\x01\x02"), Some(1));
        assert_eq!(assert_agree(b"Hello", b"hello"), None);
    }

    #[test]
    fn char_and_byte_offsets_differ_for_multibyte_text() {
        let text = "Стаття: результат";
        let pattern = "результат";
        let chars: Vec<char> = text.chars().collect();
        let needle: Vec<char> = pattern.chars().collect();

        assert_eq!(assert_agree(&chars, &needle), Some(8));
        assert_eq!(
            assert_agree(text.as_bytes(), pattern.as_bytes()),
            Some(text.find(pattern).unwrap())
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let text = b"the rain in spain stays mainly in the plain";
        for alg in Algorithm::ALL {
            let first = alg.find(text, b"ain");
            let second = alg.find(text, b"ain");
            assert_eq!(first, second);
            assert_eq!(first, Some(5));
        }
    }

    #[test]
    fn randomized_agreement_small_alphabet() {
        // Small alphabets force partial matches, border fallbacks and hash collisions
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2_000 {
            let text_len = rng.gen_range(0..64);
            let pattern_len = rng.gen_range(0..8);
            let text: Vec<u8> = (0..text_len).map(|_| rng.gen_range(b'a'..=b'c')).collect();
            let pattern: Vec<u8> = (0..pattern_len)
                .map(|_| rng.gen_range(b'a'..=b'c'))
                .collect();
            assert_agree(&text, &pattern);
        }
    }

    #[test]
    fn randomized_agreement_planted_pattern() {
        let mut rng = StdRng::seed_from_u64(42);
        let alphabet: Vec<char> = "абвгґ ".chars().collect();
        for _ in 0..500 {
            let mut text: Vec<char> = (0..rng.gen_range(1..200))
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let start = rng.gen_range(0..text.len());
            let end = rng.gen_range(start..=text.len().min(start + 24));
            let pattern = text[start..end].to_vec();
            let found = assert_agree(&text, &pattern);
            assert!(found.is_some_and(|at| at <= start));

            text.reverse();
            assert_agree(&text, &pattern);
        }
    }

    #[test]
    fn custom_hash_params_only_affect_rabin_karp() {
        let params = HashParams::new(31, 1_000_000_007).unwrap();
        for alg in Algorithm::ALL {
            assert_eq!(alg.find_with(b"bDaz", b"az", params), Some(2));
            assert_eq!(alg.find_with(b"bD", b"az", params), None);
        }
    }

    #[test]
    fn matchers_are_shareable_across_threads() {
        let text: Vec<u8> = b"abcd".repeat(1_000);
        std::thread::scope(|s| {
            for alg in Algorithm::ALL {
                let text = &text;
                s.spawn(move || assert_eq!(alg.find(text, b"dabc"), Some(3)));
            }
        });
    }
}
