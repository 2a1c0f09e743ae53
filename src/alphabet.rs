//! Base alphabet and keyed-alphabet construction.
//!
//! The keyed alphabet is a permutation of the 29-symbol base alphabet:
//! the alphabet key's symbols first, in their given order, then the
//! remaining base symbols in their original order.

use crate::error::CipherError;
use std::collections::HashMap;
use std::fmt;

/// Punctuation symbols appended to A-Z; `_` stands in for the space.
pub const EXTRA_SYMBOLS: &str = ".,_";

/// The fixed 29-symbol alphabet the cipher operates over.
pub const BASE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ.,_";

/// A keyed permutation of the base alphabet, used as the substitution table.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedAlphabet {
    /// Symbols in permuted order
    symbols: Vec<char>,
    /// Symbol to position mapping (for O(1) lookup during encryption)
    positions: HashMap<char, usize>,
}

impl KeyedAlphabet {
    /// Build a keyed alphabet by moving `key`'s symbols to the front.
    ///
    /// The key must be sanitized already: each symbol at most once, and
    /// only symbols from [`BASE_ALPHABET`]. An empty key yields the base
    /// alphabet unchanged.
    pub fn from_key(key: &str) -> Result<Self, CipherError> {
        let mut symbols: Vec<char> = Vec::with_capacity(BASE_ALPHABET.len());
        for c in key.chars() {
            if !BASE_ALPHABET.contains(c) {
                return Err(CipherError::ForeignSymbol(c));
            }
            if symbols.contains(&c) {
                return Err(CipherError::DuplicateSymbol(c));
            }
            symbols.push(c);
        }

        // Fill with the base symbols the key did not claim, in base order.
        for c in BASE_ALPHABET.chars() {
            if !symbols.contains(&c) {
                symbols.push(c);
            }
        }
        debug_assert_eq!(symbols.len(), BASE_ALPHABET.len());

        let positions = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();

        Ok(Self { symbols, positions })
    }

    /// Number of symbols (always the base alphabet length).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty (never true for a constructed alphabet)
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of `symbol` within the alphabet, if present.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// Symbol at `position`. Panics if out of range; callers stay in
    /// `0..len()` via modular arithmetic.
    pub fn symbol_at(&self, position: usize) -> char {
        self.symbols[position]
    }

    /// The alphabet rotated left by `shift` positions.
    pub fn rotated(&self, shift: usize) -> String {
        let shift = shift % self.symbols.len();
        self.symbols[shift..]
            .iter()
            .chain(&self.symbols[..shift])
            .collect()
    }

    /// Rows of the tabula recta: row `i` is the alphabet rotated left by `i`.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.symbols.len()).map(|i| self.rotated(i))
    }
}

impl fmt::Display for KeyedAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
