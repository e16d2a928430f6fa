//! Fixed substitution table for the partial plaintext guess.
//!
//! The mapping is a literal constant worked out by hand from the frequency
//! report, not derived by any inference. It covers only part of the cipher
//! alphabet; characters without an entry pass through unchanged, which is
//! why the output is a deliberately incomplete reading.

use std::collections::HashMap;

/// The hand-derived ciphertext-to-plaintext pairs.
pub const GUESS_PAIRS: [(char, char); 10] = [
    ('(', 'e'),
    ('/', 'a'),
    ('-', 'o'),
    ('.', 's'),
    ('%', 'l'),
    ('+', 'r'),
    ('2', 't'),
    ('#', 'n'),
    ('4', 'u'),
    ('8', 'm'),
];

/// One-to-one character substitution with pass-through for unmapped input.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    map: HashMap<char, char>,
}

impl SubstitutionTable {
    /// The fixed table from [`GUESS_PAIRS`].
    pub fn guess() -> Self {
        Self::from_pairs(&GUESS_PAIRS)
    }

    /// Build a table from arbitrary pairs. Later pairs win on duplicate
    /// ciphertext characters.
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        Self {
            map: pairs.iter().copied().collect(),
        }
    }

    /// Apply the substitution to every character. Any input is accepted;
    /// unmapped characters are copied as-is.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.map.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::guess()
    }
}
