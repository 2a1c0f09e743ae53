//! Error types for the cipher library.

use thiserror::Error;

/// Errors produced when building a keyed alphabet or encrypting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The alphabet key contains the same symbol more than once.
    #[error("alphabet key repeats the symbol '{0}'")]
    DuplicateSymbol(char),

    /// The alphabet key contains a symbol outside the base alphabet.
    #[error("alphabet key symbol '{0}' is not in the base alphabet")]
    ForeignSymbol(char),

    /// The cipher key is empty, so no shift can be derived.
    #[error("cipher key is empty")]
    EmptyKey,

    /// A plaintext or key symbol is missing from the keyed alphabet.
    /// Unreachable for sanitized inputs, guarded anyway.
    #[error("symbol '{0}' is not in the keyed alphabet")]
    SymbolNotInAlphabet(char),
}
