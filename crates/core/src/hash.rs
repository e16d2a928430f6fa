//! Multiplicative and division hash index calculators.
//!
//! These reproduce the enemy's (suspected) hash functions so the analyst
//! can print the index every ciphertext character would land on:
//! - multiplicative method: `floor(M * frac(k * A)) + OFFSET`
//! - division method: `(k % M) + OFFSET`
//!
//! Both are pure functions of the character code `k`. The parameters live
//! in an explicit [`HashParams`] struct so tests can run several
//! configurations side by side; there is no global state.
//!
//! Character codes for this program are always printable ASCII, so no
//! domain checks are performed on `k`.

/// Parameters of the toy hash under analysis.
///
/// `table_size` must be nonzero: the division method computes
/// `k % table_size`. Callers constructing parameters from external input
/// validate before building this struct (the application rejects a zero
/// table size at configuration time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashParams {
    /// Table size `M`, nonzero
    pub table_size: u32,
    /// Constant added to every computed index
    pub offset: u32,
    /// Multiplier `A`, a fraction in `[0, 1)`
    pub multiplier: f64,
}

impl HashParams {
    /// The intercepted hash's suspected parameters: `M = 31`, `OFFSET = 32`,
    /// `A = 0.618` (rough golden-ratio fraction).
    pub fn suspected() -> Self {
        Self {
            table_size: 31,
            offset: 32,
            multiplier: 0.618,
        }
    }

    /// Multiplicative-method index for character code `k`.
    ///
    /// With `multiplier` in `[0, 1)` the result is always in
    /// `[offset, offset + table_size - 1]`.
    pub fn hash_multiplication(&self, k: u32) -> u32 {
        let frac = (k as f64 * self.multiplier).fract();
        (self.table_size as f64 * frac).floor() as u32 + self.offset
    }

    /// Division-method index for character code `k`, always in
    /// `[offset, offset + table_size - 1]`.
    pub fn hash_division(&self, k: u32) -> u32 {
        (k % self.table_size) + self.offset
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::suspected()
    }
}

/// Character codes of `text`, in order, one per character.
pub fn char_codes(text: &str) -> Vec<u32> {
    text.chars().map(|c| c as u32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_example() {
        // (101 % 31) + 32 = 8 + 32 = 40
        let params = HashParams::suspected();
        assert_eq!(params.hash_division(101), 40);
    }

    #[test]
    fn test_multiplication_examples() {
        let params = HashParams::suspected();
        // 40 * 0.618 = 24.72 -> frac 0.72 -> floor(31 * 0.72) = 22 -> 54
        assert_eq!(params.hash_multiplication(40), 54);
        // 101 * 0.618 = 62.418 -> frac 0.418 -> floor(31 * 0.418) = 12 -> 44
        assert_eq!(params.hash_multiplication(101), 44);
    }

    #[test]
    fn test_both_methods_pure() {
        let params = HashParams::suspected();
        for k in [32u32, 40, 101, 126] {
            assert_eq!(params.hash_multiplication(k), params.hash_multiplication(k));
            assert_eq!(params.hash_division(k), params.hash_division(k));
        }
    }

    #[test]
    fn test_indices_stay_in_table_range() {
        let params = HashParams::suspected();
        let lo = params.offset;
        let hi = params.offset + params.table_size - 1;

        for k in 0u32..=255 {
            let m = params.hash_multiplication(k);
            let d = params.hash_division(k);
            assert!(m >= lo && m <= hi, "mult index {m} out of range for k={k}");
            assert!(d >= lo && d <= hi, "div index {d} out of range for k={k}");
        }
    }

    #[test]
    fn test_alternate_parameters() {
        let params = HashParams {
            table_size: 7,
            offset: 0,
            multiplier: 0.5,
        };
        assert_eq!(params.hash_division(10), 3);
        // 9 * 0.5 = 4.5 -> frac 0.5 -> floor(7 * 0.5) = 3
        assert_eq!(params.hash_multiplication(9), 3);
    }

    #[test]
    fn test_char_codes_preserve_order_and_length() {
        let codes = char_codes("(/-");
        assert_eq!(codes, vec![40, 47, 45]);
        assert!(char_codes("").is_empty());
    }
}
