// ============================================================================
// Memory Compressed Digit Array
// Two decimal digits per byte with random-access get/set
// ============================================================================

use super::carry;
use super::digit_array::DigitArray;
use super::errors::{DigitError, DigitResult};
use crate::interfaces::{write_digits, DigitStorage};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal digits packed as 4-bit nibbles.
///
/// Byte `i` holds logical digit `2i` in its high nibble and `2i + 1` in its
/// low nibble. With an odd digit count the final low nibble is padding and
/// always 0.
///
/// Built once from a normalized `DigitArray`; afterwards single digits can be
/// rewritten in place with `set`. Writes need `&mut self`, so sharing one
/// instance between threads requires external synchronization.
///
/// # Example
/// ```
/// use decimal_digits::numeric::{DigitArray, MemoryCompressedDigitArray};
///
/// let packed = MemoryCompressedDigitArray::try_from(&DigitArray::new(&[4, 6, 2]))?;
/// assert_eq!(packed.array_size(), 2);
/// assert_eq!(packed.get(1), Some(6));
/// assert_eq!(packed.to_string(), "462");
/// # Ok::<(), decimal_digits::numeric::DigitError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "PackedDigits", into = "PackedDigits")
)]
pub struct MemoryCompressedDigitArray {
    digit_count: usize,
    digits: Vec<u8>,
}

// ============================================================================
// Nibble Layout
// ============================================================================

const NIBBLE_MASK: u8 = 0x0F;

/// Packed bytes needed for `digit_count` digits.
#[inline]
const fn array_size_for(digit_count: usize) -> usize {
    digit_count.div_ceil(2)
}

/// Shift that moves a digit into its nibble: even indices use the high half.
#[inline]
const fn nibble_shift(digit_index: usize) -> u32 {
    if digit_index % 2 == 0 {
        4
    } else {
        0
    }
}

#[inline]
const fn read_nibble(byte: u8, digit_index: usize) -> u8 {
    (byte >> nibble_shift(digit_index)) & NIBBLE_MASK
}

impl MemoryCompressedDigitArray {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Pack a snapshot of any digit storage.
    ///
    /// # Errors
    /// - `LeadDigitOverflow` if the lead digit is outside [0, 9]; collect the
    ///   overflow first (`DigitArray::resolve_overflow`)
    /// - `InvalidDigit` if any other digit is outside [0, 9]
    pub fn compress<S: DigitStorage>(source: &S) -> DigitResult<Self> {
        if let Some(lead) = source.digit_at(0).filter(|&lead| !carry::is_digit(lead)) {
            tracing::debug!(lead, "refusing to pack an overflowing digit array");
            return Err(DigitError::LeadDigitOverflow { lead });
        }
        if let Some((index, value)) = source.first_invalid_digit() {
            return Err(DigitError::InvalidDigit { index, value });
        }

        let digit_count = source.digit_count();
        let mut digits = vec![0u8; array_size_for(digit_count)];
        for (index, digit) in source.iter_digits().enumerate() {
            digits[index / 2] |= (digit as u8) << nibble_shift(index);
        }
        Ok(Self {
            digit_count,
            digits,
        })
    }

    /// Rebuild from bytes previously returned by `as_bytes`.
    ///
    /// # Errors
    /// - `PackedLengthMismatch` if `bytes` does not hold `digit_count` digits
    /// - `InvalidDigit` for a nibble above 9, or a non-zero padding nibble
    ///   (reported at index `digit_count`)
    pub fn from_packed_bytes(bytes: &[u8], digit_count: usize) -> DigitResult<Self> {
        let expected = array_size_for(digit_count);
        if bytes.len() != expected {
            return Err(DigitError::PackedLengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        for index in 0..expected * 2 {
            let nibble = read_nibble(bytes[index / 2], index);
            let valid = if index < digit_count {
                nibble <= 9
            } else {
                nibble == 0
            };
            if !valid {
                return Err(DigitError::InvalidDigit {
                    index,
                    value: nibble as i8,
                });
            }
        }

        Ok(Self {
            digit_count,
            digits: bytes.to_vec(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of logical digits.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Number of packed bytes, `ceil(digit_count / 2)`.
    #[inline]
    pub fn array_size(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digit_count == 0
    }

    /// The packed bytes, suitable for persistence.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits
    }

    /// Digit at a logical index, `None` outside `0..digit_count`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i8> {
        if index >= self.digit_count {
            return None;
        }
        Some(read_nibble(self.digits[index / 2], index) as i8)
    }

    /// Replace the digit at a logical index, leaving its neighbour nibble
    /// untouched.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` if `index >= digit_count`
    /// - `InvalidDigit` if `value` is outside [0, 9]
    ///
    /// A failed call leaves the array unchanged.
    pub fn set(&mut self, index: usize, value: i8) -> DigitResult<()> {
        if index >= self.digit_count {
            return Err(DigitError::IndexOutOfBounds {
                index,
                len: self.digit_count,
            });
        }
        if !carry::is_digit(value) {
            return Err(DigitError::InvalidDigit { index, value });
        }

        let shift = nibble_shift(index);
        let byte = &mut self.digits[index / 2];
        *byte = (*byte & !(NIBBLE_MASK << shift)) | ((value as u8) << shift);
        Ok(())
    }

    /// Unpack into a plain digit array.
    pub fn to_digit_array(&self) -> DigitArray {
        self.iter_digits().collect::<Vec<_>>().into()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl DigitStorage for MemoryCompressedDigitArray {
    #[inline]
    fn digit_count(&self) -> usize {
        self.digit_count
    }

    #[inline]
    fn digit_at(&self, index: usize) -> Option<i8> {
        self.get(index)
    }
}

impl TryFrom<&DigitArray> for MemoryCompressedDigitArray {
    type Error = DigitError;

    #[inline]
    fn try_from(source: &DigitArray) -> DigitResult<Self> {
        Self::compress(source)
    }
}

impl TryFrom<DigitArray> for MemoryCompressedDigitArray {
    type Error = DigitError;

    #[inline]
    fn try_from(source: DigitArray) -> DigitResult<Self> {
        Self::compress(&source)
    }
}

impl From<&MemoryCompressedDigitArray> for DigitArray {
    fn from(packed: &MemoryCompressedDigitArray) -> Self {
        packed.to_digit_array()
    }
}

impl fmt::Debug for MemoryCompressedDigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCompressedDigitArray")
            .field("digit_count", &self.digit_count)
            .field("digits", &format_args!("{}", self))
            .finish()
    }
}

impl fmt::Display for MemoryCompressedDigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(self, f)
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Wire form; deserialization goes through `from_packed_bytes` validation.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PackedDigits {
    digit_count: usize,
    digits: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<PackedDigits> for MemoryCompressedDigitArray {
    type Error = DigitError;

    fn try_from(packed: PackedDigits) -> DigitResult<Self> {
        Self::from_packed_bytes(&packed.digits, packed.digit_count)
    }
}

#[cfg(feature = "serde")]
impl From<MemoryCompressedDigitArray> for PackedDigits {
    fn from(packed: MemoryCompressedDigitArray) -> Self {
        Self {
            digit_count: packed.digit_count,
            digits: packed.digits,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
