//! Knuth–Morris–Pratt: prefix-function precomputation, then one pass over
//! the text with no backtracking on the text cursor.

use super::Symbol;

/// Prefix function of `pattern`. Entry `i` is the length of the longest
/// proper prefix of `pattern[..=i]` that is also a suffix of it.
///
/// `table[0] == 0` and `table[i] <= i` always hold. O(L) amortized.
pub fn prefix_table<S: Symbol>(pattern: &[S]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len > 0 {
            // Retry the same i against a shorter border
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }

    table
}

/// First occurrence of `pattern` in `text`. Empty pattern matches at 0.
pub fn find<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if pattern.len() > text.len() {
        return None;
    }

    let table = prefix_table(pattern);
    let (mut i, mut j) = (0, 0);

    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                return Some(i - j);
            }
        } else if j > 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }

    None
}
