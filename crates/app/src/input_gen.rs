//! Random ciphertext generation for experiments.
//!
//! When `--random` is given, we generate a message over the same cipher
//! alphabet as the intercepted one, so the frequency report and hash
//! listing look comparable. Generation is seeded for reproducibility.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The distinct symbols observed in the intercepted message.
pub const CIPHER_ALPHABET: &[char] = &[
    '(', '/', '-', '.', '4', '%', '+', '2', '8', '#', '$', '6', '3',
];

/// Generate a random ciphertext of `len` symbols drawn uniformly from
/// [`CIPHER_ALPHABET`]. Same seed, same output.
pub fn generate_ciphertext(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| CIPHER_ALPHABET[rng.gen_range(0..CIPHER_ALPHABET.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        assert_eq!(generate_ciphertext(42, 64), generate_ciphertext(42, 64));
        assert_ne!(generate_ciphertext(1, 64), generate_ciphertext(2, 64));
    }

    #[test]
    fn test_length_and_alphabet() {
        let text = generate_ciphertext(7, 100);
        assert_eq!(text.chars().count(), 100);
        assert!(text.chars().all(|c| CIPHER_ALPHABET.contains(&c)));
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(generate_ciphertext(7, 0), "");
    }
}
