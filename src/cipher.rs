//! The substitution transform: plaintext and repeating key to ciphertext.

use crate::alphabet::KeyedAlphabet;
use crate::error::CipherError;

/// Encrypt sanitized `plain` against sanitized `key` over `alphabet`.
///
/// Each plaintext symbol is combined with the key symbol at the same
/// position (the key repeating cyclically) by adding their alphabet
/// positions modulo the alphabet length. Deterministic: the same inputs
/// always produce the same ciphertext.
pub fn encrypt(plain: &str, key: &str, alphabet: &KeyedAlphabet) -> Result<String, CipherError> {
    if plain.is_empty() {
        return Ok(String::new());
    }

    let key_symbols: Vec<char> = key.chars().collect();
    if key_symbols.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let mut ciphertext = String::with_capacity(plain.len());
    for (i, plain_symbol) in plain.chars().enumerate() {
        let key_symbol = key_symbols[i % key_symbols.len()];
        ciphertext.push(substitute(plain_symbol, key_symbol, alphabet)?);
    }
    Ok(ciphertext)
}

/// Substitute one symbol pair: position sum modulo the alphabet length.
fn substitute(
    plain_symbol: char,
    key_symbol: char,
    alphabet: &KeyedAlphabet,
) -> Result<char, CipherError> {
    let plain_pos = alphabet
        .position(plain_symbol)
        .ok_or(CipherError::SymbolNotInAlphabet(plain_symbol))?;
    let key_pos = alphabet
        .position(key_symbol)
        .ok_or(CipherError::SymbolNotInAlphabet(key_symbol))?;
    Ok(alphabet.symbol_at((plain_pos + key_pos) % alphabet.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed() -> KeyedAlphabet {
        KeyedAlphabet::from_key("KEY").unwrap()
    }

    #[test]
    fn test_encrypt_worked_example() {
        // Positions in KEYABCDFGHIJLMNOPQRSTUVWXZ.,_:
        // H=9 + A=3 -> 12 = L, E=1 + B=4 -> 5 = C, L=12 + C=5 -> 17 = Q,
        // L=12 + A=3 -> 15 = O, O=15 + B=4 -> 19 = S.
        assert_eq!(encrypt("HELLO", "ABC", &keyed()).unwrap(), "LCQOS");
    }

    #[test]
    fn test_encrypt_preserves_length() {
        let alphabet = keyed();
        for plain in ["A", "HELLO", "THE_QUICK,BROWN.FOX"] {
            let out = encrypt(plain, "SECRET", &alphabet).unwrap();
            assert_eq!(out.len(), plain.len());
        }
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let alphabet = keyed();
        let a = encrypt("SOME_PLAINTEXT", "ABC", &alphabet).unwrap();
        let b = encrypt("SOME_PLAINTEXT", "ABC", &alphabet).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encrypt_key_repeats_cyclically() {
        let alphabet = keyed();
        // A single-symbol key applies the same shift at every position.
        let out = encrypt("AAAA", "B", &alphabet).unwrap();
        let shifted = substitute('A', 'B', &alphabet).unwrap();
        assert_eq!(out, shifted.to_string().repeat(4));
    }

    #[test]
    fn test_encrypt_empty_plaintext_yields_empty_ciphertext() {
        assert_eq!(encrypt("", "ABC", &keyed()).unwrap(), "");
    }

    #[test]
    fn test_encrypt_rejects_empty_key() {
        assert_eq!(encrypt("HELLO", "", &keyed()), Err(CipherError::EmptyKey));
    }

    #[test]
    fn test_encrypt_rejects_symbol_outside_alphabet() {
        let alphabet = keyed();
        assert_eq!(
            encrypt("HE!LO", "ABC", &alphabet),
            Err(CipherError::SymbolNotInAlphabet('!'))
        );
        assert_eq!(
            encrypt("HELLO", "A?C", &alphabet),
            Err(CipherError::SymbolNotInAlphabet('?'))
        );
    }

    #[test]
    fn test_encrypt_wraps_around_alphabet_end() {
        // Base alphabet, '_' at position 28: 28 + 28 = 56, 56 % 29 = 27 -> ','
        let alphabet = KeyedAlphabet::from_key("").unwrap();
        assert_eq!(encrypt("_", "_", &alphabet).unwrap(), ",");
    }
}
