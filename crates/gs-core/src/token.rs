//! Invite token generation.

use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 11;

/// Generate a random base-36 invite token.
///
/// No collision check is performed; the invite store overwrites on the
/// (vanishingly unlikely) duplicate.
pub fn generate() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
