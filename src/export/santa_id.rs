// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Short random ids used in the shareable links.
//!
//! These are not universally unique, only unique enough within one group,
//! and short so the links stay easy to send around. Uniqueness within a role
//! is checked when the lookup table is built.

use rand::Rng;

/// Characters a santa id is drawn from.
pub const SANTA_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Draw a santa id of `len` characters.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use secret_santa::export::santa_id;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// let id = santa_id(&mut rng, 5);
/// assert_eq!(id.len(), 5);
/// assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn santa_id<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| SANTA_ALPHABET[rng.gen_range(0..SANTA_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_alphabet_size() {
        assert_eq!(SANTA_ALPHABET.len(), 36);
    }

    #[test]
    fn test_zero_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(santa_id(&mut rng, 0), "");
    }

    #[test]
    fn test_deterministic_under_seed() {
        let a = santa_id(&mut ChaCha20Rng::seed_from_u64(42), 8);
        let b = santa_id(&mut ChaCha20Rng::seed_from_u64(42), 8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_uses_whole_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let drawn = santa_id(&mut rng, 2000);
        for &c in SANTA_ALPHABET {
            assert!(drawn.contains(c as char), "never drew {:?}", c as char);
        }
    }
}
