// ============================================================================
// Overflow Resolution
// Tagged outcome of normalizing a digit array's lead digit
// ============================================================================

use super::digit_array::DigitArray;

/// Result of `DigitArray::resolve_overflow`.
///
/// Arithmetic never grows a digit array; a carry or borrow that runs past
/// index 0 is reported here instead, and it is up to the caller to prepend
/// digits or treat the value as negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OverflowResolution {
    /// Lead digit carried no overflow
    Normalized(DigitArray),

    /// Lead digit carried `magnitude` units of `10^len`
    /// - Positive: carry out of addition
    /// - Negative: borrow out of subtraction (`array` holds `10^len + a - b`)
    Overflow { magnitude: i64, array: DigitArray },
}

impl OverflowResolution {
    /// Signed overflow in units of `10^len` (0 when normalized).
    #[inline]
    pub fn magnitude(&self) -> i64 {
        match self {
            OverflowResolution::Normalized(_) => 0,
            OverflowResolution::Overflow { magnitude, .. } => *magnitude,
        }
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, OverflowResolution::Overflow { .. })
    }

    /// The array with its lead digit normalized.
    #[inline]
    pub fn array(&self) -> &DigitArray {
        match self {
            OverflowResolution::Normalized(array) => array,
            OverflowResolution::Overflow { array, .. } => array,
        }
    }

    /// Split into the normalized array and the signed magnitude.
    pub fn into_parts(self) -> (DigitArray, i64) {
        match self {
            OverflowResolution::Normalized(array) => (array, 0),
            OverflowResolution::Overflow { magnitude, array } => (array, magnitude),
        }
    }
}
