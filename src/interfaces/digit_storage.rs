// ============================================================================
// Digit Storage Interface
// Random-access contract shared by plain and packed digit arrays
// ============================================================================

use std::fmt;

/// Read access to a sequence of decimal digits, most significant first.
///
/// Implemented by both `DigitArray` (one byte per digit) and
/// `MemoryCompressedDigitArray` (one nibble per digit), so rendering and
/// packing can work against either representation.
pub trait DigitStorage {
    /// Number of logical digits.
    fn digit_count(&self) -> usize;

    /// Digit at a logical index, `None` when the index is out of range.
    fn digit_at(&self, index: usize) -> Option<i8>;

    /// Iterate all digits in logical order.
    fn iter_digits(&self) -> DigitIter<'_, Self>
    where
        Self: Sized,
    {
        DigitIter {
            storage: self,
            index: 0,
        }
    }

    /// True when every digit lies in [0, 9].
    fn is_normalized(&self) -> bool
    where
        Self: Sized,
    {
        self.iter_digits().all(|digit| (0..=9).contains(&digit))
    }

    /// Index and value of the first digit outside [0, 9].
    fn first_invalid_digit(&self) -> Option<(usize, i8)>
    where
        Self: Sized,
    {
        self.iter_digits()
            .enumerate()
            .find(|(_, digit)| !(0..=9).contains(digit))
    }
}

/// Iterator over the digits of a `DigitStorage`.
pub struct DigitIter<'a, S: DigitStorage> {
    storage: &'a S,
    index: usize,
}

impl<S: DigitStorage> Iterator for DigitIter<'_, S> {
    type Item = i8;

    fn next(&mut self) -> Option<Self::Item> {
        let digit = self.storage.digit_at(self.index)?;
        self.index += 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.storage.digit_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<S: DigitStorage> ExactSizeIterator for DigitIter<'_, S> {}

/// Write every digit with no separators.
///
/// Out-of-range digits (lead-digit overflow) are written as their full
/// signed value, e.g. `[16, 0]` renders as `"160"`.
pub(crate) fn write_digits<S: DigitStorage>(storage: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for digit in storage.iter_digits() {
        write!(f, "{}", digit)?;
    }
    Ok(())
}
