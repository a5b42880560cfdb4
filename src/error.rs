//! Error types.

use thiserror::Error;

/// Errors surfaced by the evolution engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A genome was scored against a target of a different length.
    ///
    /// The driver never produces this, since every genome it creates has
    /// the target's length; hitting it means the caller mixed lengths.
    #[error("genome length {genome} does not match target length {target}")]
    LengthMismatch { genome: usize, target: usize },

    /// A genome string contained a character other than '0' or '1'.
    #[error("invalid symbol {symbol:?} at position {position}: expected '0' or '1'")]
    InvalidSymbol { symbol: char, position: usize },

    /// The run configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message_names_both_lengths() {
        let err = Error::LengthMismatch {
            genome: 8,
            target: 10,
        };
        assert_eq!(
            err.to_string(),
            "genome length 8 does not match target length 10"
        );
    }

    #[test]
    fn test_invalid_symbol_message_names_the_offender() {
        let err = Error::InvalidSymbol {
            symbol: 'x',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid symbol 'x' at position 3: expected '0' or '1'"
        );
    }
}
