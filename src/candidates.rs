//! Candidate generator.
//!
//! Produces every string over an alphabet with length `1..=max_length`,
//! shortest first. Within one length the order is the Cartesian product of
//! the alphabet with itself, rightmost position varying fastest, so for
//! `ab` up to length 2 the sequence is `a b aa ab ba bb`.

use std::iter::FusedIterator;

use crate::alphabet::Alphabet;

/// Lazy, finite candidate sequence.
///
/// Create a new one to restart from the beginning.
pub struct Candidates<'a> {
    symbols: &'a [char],
    max_length: usize,
    /// Index into `symbols` for each position of the next candidate
    odometer: Vec<usize>,
    exhausted: bool,
}

impl<'a> Candidates<'a> {
    pub fn new(alphabet: &'a Alphabet, max_length: usize) -> Self {
        let exhausted = alphabet.is_empty() || max_length == 0;
        Self {
            symbols: alphabet.symbols(),
            max_length,
            odometer: if exhausted { Vec::new() } else { vec![0] },
            exhausted,
        }
    }

    /// Length of the candidate that will be yielded next, if any.
    pub fn current_length(&self) -> Option<usize> {
        (!self.exhausted).then_some(self.odometer.len())
    }

    fn advance(&mut self) {
        for digit in self.odometer.iter_mut().rev() {
            *digit += 1;
            if *digit < self.symbols.len() {
                return;
            }
            *digit = 0;
        }

        // Every position wrapped: move on to the next length
        if self.odometer.len() >= self.max_length {
            self.exhausted = true;
        } else {
            self.odometer.push(0);
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let candidate: String = self.odometer.iter().map(|&i| self.symbols[i]).collect();
        self.advance();
        Some(candidate)
    }
}

impl FusedIterator for Candidates<'_> {}

/// Number of candidates of exactly `length` characters.
pub fn candidates_of_length(alphabet_len: usize, length: usize) -> Option<u64> {
    let length = u32::try_from(length).ok()?;
    (alphabet_len as u64).checked_pow(length)
}

/// Total number of candidates for lengths `1..=max_length`.
///
/// Returns `None` when the count does not fit in a `u64`.
pub fn search_space(alphabet_len: usize, max_length: usize) -> Option<u64> {
    match alphabet_len {
        0 => return Some(0),
        1 => return u64::try_from(max_length).ok(),
        _ => {}
    }

    (1..=max_length).try_fold(0u64, |total, length| {
        total.checked_add(candidates_of_length(alphabet_len, length)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_two_symbols() {
        let alphabet = Alphabet::new("ab".chars());
        let all: Vec<String> = Candidates::new(&alphabet, 2).collect();
        assert_eq!(all, vec!["a", "b", "aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_cartesian_product_per_length() {
        let alphabet = Alphabet::new("xyz".chars());
        let length_three: Vec<String> = Candidates::new(&alphabet, 3)
            .filter(|c| c.chars().count() == 3)
            .collect();

        let mut expected = Vec::new();
        for a in alphabet.symbols() {
            for b in alphabet.symbols() {
                for c in alphabet.symbols() {
                    expected.push([*a, *b, *c].iter().collect::<String>());
                }
            }
        }

        assert_eq!(length_three, expected);
    }

    #[test]
    fn test_lengths_non_decreasing() {
        let alphabet = Alphabet::lowercase();
        let lengths: Vec<usize> = Candidates::new(&alphabet, 2).map(|c| c.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lengths.first(), Some(&1));
        assert_eq!(lengths.last(), Some(&2));
    }

    #[test]
    fn test_lowercase_boundaries() {
        let alphabet = Alphabet::lowercase();
        let all: Vec<String> = Candidates::new(&alphabet, 3).collect();
        assert_eq!(all.len(), 26 + 676 + 17576);
        assert_eq!(all[0], "a");
        assert_eq!(all[25], "z");
        assert_eq!(all[26], "aa");
        assert_eq!(all[27], "ab");
        assert_eq!(all[26 + 26], "ba");
        assert_eq!(all.last().map(String::as_str), Some("zzz"));
    }

    #[test]
    fn test_single_symbol() {
        let alphabet = Alphabet::new("a".chars());
        let all: Vec<String> = Candidates::new(&alphabet, 3).collect();
        assert_eq!(all, vec!["a", "aa", "aaa"]);
    }

    #[test]
    fn test_empty_space() {
        let empty = Alphabet::new("".chars());
        assert_eq!(Candidates::new(&empty, 5).count(), 0);

        let alphabet = Alphabet::lowercase();
        let mut none = Candidates::new(&alphabet, 0);
        assert_eq!(none.current_length(), None);
        assert_eq!(none.next(), None);
    }

    #[test]
    fn test_fused_and_restartable() {
        let alphabet = Alphabet::new("ab".chars());
        let mut iter = Candidates::new(&alphabet, 1);
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        let first: Vec<String> = Candidates::new(&alphabet, 2).collect();
        let second: Vec<String> = Candidates::new(&alphabet, 2).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_current_length() {
        let alphabet = Alphabet::new("ab".chars());
        let mut iter = Candidates::new(&alphabet, 2);
        assert_eq!(iter.current_length(), Some(1));
        iter.next();
        iter.next();
        assert_eq!(iter.current_length(), Some(2));
    }

    #[test]
    fn test_search_space_matches_generator() {
        let alphabet = Alphabet::new("abcd".chars());
        for max in 0..=4 {
            let generated = Candidates::new(&alphabet, max).count() as u64;
            assert_eq!(search_space(alphabet.len(), max), Some(generated));
        }
    }

    #[test]
    fn test_search_space_overflow() {
        assert_eq!(search_space(26, 3), Some(18278));
        assert_eq!(search_space(0, 10), Some(0));
        assert_eq!(search_space(62, 20), None);
    }

    #[test]
    fn test_search_space_single_symbol_is_immediate() {
        assert_eq!(search_space(1, 0), Some(0));
        assert_eq!(search_space(1, 3), Some(3));
        assert_eq!(search_space(1, 1_000_000_000_000), Some(1_000_000_000_000));

        let alphabet = Alphabet::new("a".chars());
        assert_eq!(
            search_space(alphabet.len(), 5),
            Some(Candidates::new(&alphabet, 5).count() as u64)
        );
    }
}
