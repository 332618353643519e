//! Token classification.

use serde::{Deserialize, Serialize};

use crate::numeric::is_numeric;

/// The three buckets derived from one input sequence.
///
/// `numbers` and `alphabets` are subsequences of the input in original order.
/// Tokens that are neither numeric nor a single ASCII letter (for example
/// `"AB"`) land in no bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub numbers: Vec<String>,
    pub alphabets: Vec<String>,
    /// Empty, or exactly one element taken from `alphabets`.
    pub highest_alphabet: Vec<String>,
}

/// Split `data` into numeric tokens, single-letter tokens, and the highest letter.
pub fn classify(data: &[String]) -> Classification {
    let numbers: Vec<String> = data.iter().filter(|t| is_numeric(t)).cloned().collect();
    let alphabets: Vec<String> = data
        .iter()
        .filter(|t| is_single_letter(t))
        .cloned()
        .collect();
    let highest_alphabet = highest_alphabet(&alphabets).cloned().into_iter().collect();

    Classification {
        numbers,
        alphabets,
        highest_alphabet,
    }
}

/// Exactly one character, and that character is `A`-`Z` or `a`-`z`.
pub fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// Case-insensitive maximum of `alphabets`.
///
/// Scans left to right and only replaces the running maximum when a candidate
/// is strictly greater, so among equal letters the first one seen is returned.
pub fn highest_alphabet(alphabets: &[String]) -> Option<&String> {
    let mut iter = alphabets.iter();
    let first = iter.next()?;
    let mut max_key = first.to_lowercase();

    Some(iter.fold(first, |max, candidate| {
        let key = candidate.to_lowercase();
        if key > max_key {
            max_key = key;
            candidate
        } else {
            max
        }
    }))
}
