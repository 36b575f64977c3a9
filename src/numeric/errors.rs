// ============================================================================
// Digit Errors
// Error types for digit array construction, arithmetic and packed storage
// ============================================================================

use std::fmt;

/// Errors that can occur while building or operating on digit arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitError {
    /// A digit outside [0, 9] where a normalized digit is required
    InvalidDigit { index: usize, value: i8 },
    /// Write outside the logical digit range
    IndexOutOfBounds { index: usize, len: usize },
    /// Lead digit still carries an unresolved carry or borrow
    LeadDigitOverflow { lead: i8 },
    /// Non-digit character in strictly parsed input
    InvalidCharacter { position: usize, character: char },
    /// Strictly parsed input contained no characters
    Empty,
    /// Decimal value is negative or has a fractional part
    NotUnsignedInteger,
    /// Packed byte sequence does not match the declared digit count
    PackedLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitError::InvalidDigit { index, value } => {
                write!(f, "invalid digit {} at index {}: expected 0-9", value, index)
            },
            DigitError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for {} digits", index, len)
            },
            DigitError::LeadDigitOverflow { lead } => write!(
                f,
                "lead digit overflow ({}): collect the overflow before compressing",
                lead
            ),
            DigitError::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "invalid character {:?} at position {}: expected a decimal digit",
                character, position
            ),
            DigitError::Empty => write!(f, "invalid input: no digits"),
            DigitError::NotUnsignedInteger => {
                write!(f, "value is not a non-negative integer")
            },
            DigitError::PackedLengthMismatch { expected, actual } => write!(
                f,
                "packed length mismatch: expected {} bytes, found {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for DigitError {}

/// Result type alias for digit operations
pub type DigitResult<T> = Result<T, DigitError>;
