//! Simplified Boyer–Moore: bad-character rule only, keyed on the symbol under
//! the last position of the current window. No good-suffix rule, so the worst
//! case degrades to O(N·L).

use std::collections::HashMap;

use super::Symbol;

/// Skip distance per symbol. Symbols not in the pattern skip the whole pattern.
#[derive(Debug, Clone)]
pub struct ShiftTable<S> {
    shifts: HashMap<S, usize>,
    pattern_len: usize,
}

impl<S: Symbol> ShiftTable<S> {
    /// Every symbol but the last maps to its distance from the pattern's end;
    /// the rightmost occurrence wins. The last symbol gets the full length
    /// only when it does not already occur earlier.
    pub fn new(pattern: &[S]) -> Self {
        let len = pattern.len();
        let mut shifts = HashMap::with_capacity(len);

        if let Some((&last, init)) = pattern.split_last() {
            for (index, &symbol) in init.iter().enumerate() {
                shifts.insert(symbol, len - 1 - index);
            }
            shifts.entry(last).or_insert(len);
        }

        Self {
            shifts,
            pattern_len: len,
        }
    }

    #[must_use]
    pub fn shift(&self, symbol: S) -> usize {
        self.shifts.get(&symbol).copied().unwrap_or(self.pattern_len)
    }

    /// Number of distinct symbols with an explicit entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

/// First occurrence of `pattern` in `text`. Empty pattern matches at 0.
pub fn find<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }
    if m > text.len() {
        return None;
    }

    let table = ShiftTable::new(pattern);
    let mut i = 0;

    while i + m <= text.len() {
        let window = &text[i..i + m];
        let mut j = m;
        while j > 0 && window[j - 1] == pattern[j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(i);
        }
        i += table.shift(window[m - 1]);
    }

    None
}
