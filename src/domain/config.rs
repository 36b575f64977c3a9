// ============================================================================
// Arithmetic Configuration
// Operand alignment and validation settings for digit array arithmetic
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Alignment
// ============================================================================

/// Defines how operands of different lengths are lined up before arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    /// Align at the least-significant (last) digit
    /// - Shorter operand is padded with zeros on the left
    /// - Use case: whole numbers, `12 + 345`
    #[default]
    Trailing,

    /// Align at the most-significant (first) digit
    /// - Shorter operand is padded with zeros on the right
    /// - Use case: decimal places, `.12 + .345`
    Leading,
}

impl Alignment {
    /// Number of zeros placed before the digits of an operand of `len`
    /// digits when it is widened to `width` digits.
    #[inline]
    pub(crate) fn lead_padding(self, len: usize, width: usize) -> usize {
        match self {
            Alignment::Trailing => width.saturating_sub(len),
            Alignment::Leading => 0,
        }
    }
}

// ============================================================================
// Arithmetic Configuration
// ============================================================================

/// Settings consumed by `DigitArray::add_with` and `DigitArray::sub_with`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// How operands of different lengths are aligned
    pub alignment: Alignment,

    /// Reject operands that are not normalized (subtrahends are always checked)
    pub strict_operands: bool,
}

impl ArithmeticConfig {
    /// Create the default configuration (trailing alignment, lenient addends)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set operand alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder method: Require normalized addends
    pub fn with_strict_operands(mut self, strict: bool) -> Self {
        self.strict_operands = strict;
        self
    }

    /// Configuration for fraction digits (decimal places)
    pub fn decimal_places() -> Self {
        Self::new().with_alignment(Alignment::Leading)
    }
}
