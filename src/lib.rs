//! polysub: keyed-alphabet polyalphabetic substitution cipher
//!
//! Encrypts text over a fixed 29-symbol alphabet (A-Z plus `.` `,` `_`,
//! with `_` standing in for the space) using a keyed permutation of that
//! alphabet as the substitution table.
//!
//! ## How it works
//!
//! 1. **Sanitize**: reduce raw text to the 29-symbol alphabet
//! 2. **Key the alphabet**: move the alphabet key's symbols to the front
//! 3. **Encrypt**: add plaintext and key positions modulo the alphabet length

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod sanitize;

pub use alphabet::{KeyedAlphabet, BASE_ALPHABET};
pub use cipher::encrypt;
pub use error::CipherError;
pub use sanitize::sanitize;
