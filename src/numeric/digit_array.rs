// ============================================================================
// Digit Array
// Fixed-length decimal digits with carry and borrow arithmetic
// ============================================================================

use super::carry;
use super::errors::{DigitError, DigitResult};
use super::overflow::OverflowResolution;
use crate::domain::{Alignment, ArithmeticConfig};
use crate::interfaces::{write_digits, DigitStorage};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digits kept inline before spilling to the heap (covers every `u64`).
pub const INLINE_DIGITS: usize = 24;

pub(crate) type DigitBuf = SmallVec<[i8; INLINE_DIGITS]>;

/// Ordered base-10 digits, most significant first.
///
/// Arithmetic keeps the length fixed at `max(len a, len b)`. A carry or borrow
/// that runs past index 0 is left in the lead digit (outside [0, 9]) rather
/// than growing the array; see `is_lead_digit_overflowing`.
///
/// # Example
/// ```
/// use decimal_digits::numeric::DigitArray;
///
/// let sum = DigitArray::new(&[7, 5]) + DigitArray::new(&[8, 5]);
/// assert!(sum.is_lead_digit_overflowing());
///
/// let (array, carry) = sum.resolve_overflow().into_parts();
/// assert_eq!(carry, 1);
/// assert_eq!(array.to_string(), "60");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DigitArray {
    digits: DigitBuf,
}

impl DigitArray {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw digit values.
    ///
    /// Values are not validated, so overflow states can be represented.
    #[inline]
    pub fn new(digits: &[i8]) -> Self {
        Self {
            digits: SmallVec::from_slice(digits),
        }
    }

    /// Single zero digit.
    #[inline]
    pub fn zero() -> Self {
        Self::new(&[0])
    }

    /// Create from a non-negative integer. Never has leading zeros.
    pub fn from_integer(integer: u64) -> Self {
        Self {
            digits: integer
                .to_string()
                .bytes()
                .map(|byte| (byte - b'0') as i8)
                .collect(),
        }
    }

    /// Create from text, keeping only the ASCII digits `0`-`9`.
    ///
    /// Every other character is dropped, so `"1,024"` becomes `[1, 0, 2, 4]`.
    /// Use `str::parse` to reject such input instead.
    pub fn from_string(value: &str) -> Self {
        Self {
            digits: value
                .chars()
                .filter_map(|character| character.to_digit(10))
                .map(|digit| digit as i8)
                .collect(),
        }
    }

    /// Digits after the decimal point of a non-negative `Decimal`.
    ///
    /// Trailing zeros of the fraction are dropped; an integral value yields
    /// `[0]`. Pair with `ArithmeticConfig::decimal_places` for arithmetic.
    ///
    /// # Errors
    /// Returns `NotUnsignedInteger` for negative values.
    pub fn fraction_digits(value: Decimal) -> DigitResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DigitError::NotUnsignedInteger);
        }
        let fraction = value.fract().normalize();
        if fraction.is_zero() {
            return Ok(Self::zero());
        }
        let text = fraction.to_string();
        Ok(Self::from_string(
            text.split_once('.').map_or("", |(_, digits)| digits),
        ))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn digits(&self) -> &[i8] {
        &self.digits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// The size of the array (equal to its digit count).
    #[inline]
    pub fn size(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i8> {
        self.digits.get(index).copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, i8> {
        self.digits.iter()
    }

    // ========================================================================
    // Lead Digit Overflow
    // ========================================================================

    /// True when index 0 lies outside [0, 9] after an unresolved carry
    /// (above 9) or borrow (below 0).
    #[inline]
    pub fn is_lead_digit_overflowing(&self) -> bool {
        carry::is_lead_overflowing(&self.digits)
    }

    /// Normalize the lead digit in place and return the overflow magnitude.
    ///
    /// - Carry (lead > 9): returns `lead / 10`, lead becomes `lead % 10`
    /// - Borrow (lead < 0): returns `lead / 10` (negative), lead becomes
    ///   `10 - |lead| % 10`
    /// - Normalized lead: returns 0 and leaves the array untouched
    pub fn collect_overflow_from_lead_digit(&mut self) -> i64 {
        carry::collect_lead_overflow(&mut self.digits)
    }

    /// Pure form of `collect_overflow_from_lead_digit`.
    pub fn resolve_overflow(mut self) -> OverflowResolution {
        match self.collect_overflow_from_lead_digit() {
            0 => OverflowResolution::Normalized(self),
            magnitude => OverflowResolution::Overflow {
                magnitude,
                array: self,
            },
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Addition with explicit alignment and operand validation.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when `strict_operands` is set and either addend
    /// holds a digit outside [0, 9].
    pub fn add_with(&self, rhs: &Self, config: &ArithmeticConfig) -> DigitResult<Self> {
        if config.strict_operands {
            Self::require_normalized(self)?;
            Self::require_normalized(rhs)?;
        }
        Ok(self.add_aligned(rhs, config.alignment))
    }

    /// Subtraction with explicit alignment and operand validation.
    ///
    /// # Errors
    /// Returns `InvalidDigit` when the subtrahend (or, with
    /// `strict_operands`, the minuend) holds a digit outside [0, 9].
    pub fn sub_with(&self, rhs: &Self, config: &ArithmeticConfig) -> DigitResult<Self> {
        if config.strict_operands {
            Self::require_normalized(self)?;
        }
        self.sub_aligned(rhs, config.alignment)
    }

    /// Checked subtraction, operands aligned at the last digit.
    ///
    /// # Errors
    /// Returns `InvalidDigit` if `rhs` is not normalized.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> DigitResult<Self> {
        self.sub_aligned(rhs, Alignment::Trailing)
    }

    fn add_aligned(&self, rhs: &Self, alignment: Alignment) -> Self {
        let width = self.len().max(rhs.len());
        let mut sum = self.widen(width, alignment);
        for (digit, other) in sum.iter_mut().zip(rhs.widen(width, alignment)) {
            *digit = digit.wrapping_add(other);
        }
        carry::propagate_carries(&mut sum);
        Self { digits: sum }
    }

    fn sub_aligned(&self, rhs: &Self, alignment: Alignment) -> DigitResult<Self> {
        Self::require_normalized(rhs)?;
        let width = self.len().max(rhs.len());
        let mut difference = self.widen(width, alignment);
        carry::subtract_in_place(&mut difference, &rhs.widen(width, alignment));
        Ok(Self { digits: difference })
    }

    /// Copy of the digits zero-padded to `width`.
    fn widen(&self, width: usize, alignment: Alignment) -> DigitBuf {
        let mut buf = DigitBuf::with_capacity(width);
        buf.resize(alignment.lead_padding(self.len(), width), 0);
        buf.extend_from_slice(&self.digits);
        buf.resize(width, 0);
        buf
    }

    fn require_normalized(operand: &Self) -> DigitResult<()> {
        match operand.first_invalid_digit() {
            Some((index, value)) => Err(DigitError::InvalidDigit { index, value }),
            None => Ok(()),
        }
    }

    /// Find an index that can be borrowed from.
    ///
    /// Scans from `start_index` down to 0 and returns the first index whose
    /// digit is positive. A start index past the end scans from the last
    /// digit. `None` means the whole prefix is zero.
    pub fn find_borrowable_index(&self, start_index: usize) -> Option<usize> {
        carry::find_borrowable_index(&self.digits, start_index.saturating_add(1))
    }

    // ========================================================================
    // Trimming
    // ========================================================================

    /// Remove the zeros at the end of the array, keeping index 0.
    ///
    /// All-zero and empty arrays become `[0]`.
    pub fn trim_trailing_zeros(self) -> Self {
        match self.digits.iter().rposition(|&digit| digit != 0) {
            None => Self::zero(),
            Some(last) if last + 1 == self.len() => self,
            Some(last) => {
                let mut digits = self.digits;
                digits.truncate(last + 1);
                Self { digits }
            },
        }
    }

    /// Remove the zeros at the start of the array.
    ///
    /// All-zero and empty arrays become `[0]`.
    pub fn trim_leading_zeros(self) -> Self {
        match self.digits.iter().position(|&digit| digit != 0) {
            None => Self::zero(),
            Some(0) => self,
            Some(first) => Self::new(&self.digits[first..]),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl DigitStorage for DigitArray {
    #[inline]
    fn digit_count(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    fn digit_at(&self, index: usize) -> Option<i8> {
        self.get(index)
    }
}

impl From<Vec<i8>> for DigitArray {
    fn from(digits: Vec<i8>) -> Self {
        Self {
            digits: SmallVec::from_vec(digits),
        }
    }
}

impl From<&[i8]> for DigitArray {
    fn from(digits: &[i8]) -> Self {
        Self::new(digits)
    }
}

impl TryFrom<Decimal> for DigitArray {
    type Error = DigitError;

    /// Convert a non-negative integral `Decimal` (API boundaries only).
    fn try_from(value: Decimal) -> DigitResult<Self> {
        if (value.is_sign_negative() && !value.is_zero()) || !value.fract().is_zero() {
            return Err(DigitError::NotUnsignedInteger);
        }
        Ok(Self::from_string(&value.trunc().to_string()))
    }
}

impl<'a> IntoIterator for &'a DigitArray {
    type Item = &'a i8;
    type IntoIter = std::slice::Iter<'a, i8>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}

impl Add<&DigitArray> for &DigitArray {
    type Output = DigitArray;

    /// Operands are aligned at the last digit; the length never changes.
    #[inline]
    fn add(self, rhs: &DigitArray) -> Self::Output {
        self.add_aligned(rhs, Alignment::Trailing)
    }
}

impl Add for DigitArray {
    type Output = DigitArray;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

// Infallible Sub for ergonomics (panics on a non-normalized subtrahend - use checked_sub otherwise)
impl Sub<&DigitArray> for &DigitArray {
    type Output = DigitArray;

    #[inline]
    fn sub(self, rhs: &DigitArray) -> Self::Output {
        self.checked_sub(rhs)
            .expect("DigitArray subtraction requires a normalized subtrahend")
    }
}

impl Sub for DigitArray {
    type Output = DigitArray;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigitArray")
            .field(&self.digits.as_slice())
            .finish()
    }
}

impl fmt::Display for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(self, f)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for DigitArray {
    type Err = DigitError;

    /// Strictly parse a digit string.
    ///
    /// # Examples
    /// - "394" -> [3, 9, 4]
    /// - "007" -> [0, 0, 7]
    /// - "3.9" -> Err(InvalidCharacter)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DigitError::Empty);
        }
        s.chars()
            .enumerate()
            .map(|(position, character)| {
                character
                    .to_digit(10)
                    .map(|digit| digit as i8)
                    .ok_or(DigitError::InvalidCharacter {
                        position,
                        character,
                    })
            })
            .collect::<DigitResult<DigitBuf>>()
            .map(|digits| Self { digits })
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_digits(max_len: usize) -> impl Strategy<Value = Vec<i8>> {
        prop::collection::vec(0i8..=9, 1..=max_len)
    }

    /// Equal-length operands whose minuend has a non-zero lead digit.
    fn minuend_and_subtrahend() -> impl Strategy<Value = (Vec<i8>, Vec<i8>)> {
        (1usize..=18).prop_flat_map(|len| {
            (
                (1i8..=9, prop::collection::vec(0i8..=9, len - 1)).prop_map(|(lead, rest)| {
                    let mut digits = vec![lead];
                    digits.extend(rest);
                    digits
                }),
                prop::collection::vec(0i8..=9, len),
            )
        })
    }

    fn value_of(digits: &[i8]) -> u128 {
        digits
            .iter()
            .fold(0u128, |acc, &digit| acc * 10 + digit as u128)
    }

    proptest! {
        #[test]
        fn addition_keeps_length(a in any_digits(30), b in any_digits(30)) {
            let sum = DigitArray::from(a.clone()) + DigitArray::from(b.clone());
            prop_assert_eq!(sum.size(), a.len().max(b.len()));
        }

        #[test]
        fn subtraction_keeps_length(a in any_digits(30), b in any_digits(30)) {
            let difference = DigitArray::from(a.clone()) - DigitArray::from(b.clone());
            prop_assert_eq!(difference.size(), a.len().max(b.len()));
        }

        #[test]
        fn integer_round_trip(n: u64) {
            prop_assert_eq!(DigitArray::from_integer(n).to_string(), n.to_string());
        }

        #[test]
        fn carry_reconstructs_sum(a in any_digits(18), b in any_digits(18)) {
            let width = a.len().max(b.len()) as u32;
            let expected = value_of(&a) + value_of(&b);
            let sum = DigitArray::from(a) + DigitArray::from(b);
            let overflowing = sum.is_lead_digit_overflowing();

            let (array, carry) = sum.resolve_overflow().into_parts();
            prop_assert_eq!(overflowing, carry > 0);
            prop_assert!(array.is_normalized());
            prop_assert_eq!(carry as u128 * 10u128.pow(width) + value_of(array.digits()), expected);
        }

        #[test]
        fn borrow_wraps_modulo_width((a, b) in minuend_and_subtrahend()) {
            let width = a.len() as u32;
            let (a_value, b_value) = (value_of(&a), value_of(&b));
            let difference = DigitArray::from(a) - DigitArray::from(b);
            prop_assert_eq!(difference.is_lead_digit_overflowing(), a_value < b_value);

            let (array, borrow) = difference.resolve_overflow().into_parts();
            prop_assert!(array.is_normalized());
            if a_value < b_value {
                prop_assert_eq!(borrow, -1);
                prop_assert_eq!(value_of(array.digits()), 10u128.pow(width) + a_value - b_value);
            } else {
                prop_assert_eq!(borrow, 0);
                prop_assert_eq!(value_of(array.digits()), a_value - b_value);
            }
        }

        #[test]
        fn trimming_is_idempotent(a in any_digits(30)) {
            let leading = DigitArray::from(a.clone()).trim_leading_zeros();
            prop_assert_eq!(leading.clone().trim_leading_zeros(), leading);

            let trailing = DigitArray::from(a).trim_trailing_zeros();
            prop_assert_eq!(trailing.clone().trim_trailing_zeros(), trailing);
        }

        #[test]
        fn all_zero_trims_to_single_zero(len in 1usize..40) {
            prop_assert_eq!(DigitArray::from(vec![0i8; len]).trim_leading_zeros(), DigitArray::zero());
            prop_assert_eq!(DigitArray::from(vec![0i8; len]).trim_trailing_zeros(), DigitArray::zero());
        }
    }
}
