// ============================================================================
// Carry and Borrow Helpers
// Column-level primitives shared by digit array addition and subtraction
// ============================================================================

/// Lead digit written when a borrow finds no non-zero digit to its left.
///
/// Collecting it yields a magnitude of `-1` and a lead digit of `9`, the same
/// outcome as `10^len` having been borrowed.
pub const UNDERFLOW_SENTINEL: i8 = -11;

/// True when `digit` is a normalized decimal digit.
#[inline]
pub(crate) const fn is_digit(digit: i8) -> bool {
    0 <= digit && digit <= 9
}

/// True when the lead digit holds an unresolved carry or borrow.
#[inline]
pub(crate) fn is_lead_overflowing(digits: &[i8]) -> bool {
    digits.first().is_some_and(|&lead| !is_digit(lead))
}

/// Push every column above 9 into its left neighbour, right to left.
///
/// Index 0 is never reduced, so the length of `digits` is fixed and a final
/// carry stays visible in the lead digit.
pub(crate) fn propagate_carries(digits: &mut [i8]) {
    for i in (1..digits.len()).rev() {
        let value = digits[i];
        if value > 9 {
            digits[i - 1] = digits[i - 1].wrapping_add(value / 10);
            digits[i] = value % 10;
        }
    }
}

/// Nearest index below `before` holding a positive digit.
#[inline]
pub(crate) fn find_borrowable_index(digits: &[i8], before: usize) -> Option<usize> {
    digits[..before.min(digits.len())]
        .iter()
        .rposition(|&digit| digit > 0)
}

/// Subtract `subtrahend` from `minuend` column by column.
///
/// Both slices have the same length and `subtrahend` is normalized. Zero
/// subtrahend columns are skipped without looking at the minuend.
pub(crate) fn subtract_in_place(minuend: &mut [i8], subtrahend: &[i8]) {
    debug_assert_eq!(minuend.len(), subtrahend.len());

    for i in (0..minuend.len()).rev() {
        let other = subtrahend[i];
        if other == 0 {
            continue;
        }
        let diff = i16::from(minuend[i]) - i16::from(other);
        if diff >= 0 {
            minuend[i] = diff as i8;
            continue;
        }

        let column = match find_borrowable_index(minuend, i) {
            Some(j) => {
                minuend[j] -= 1;
                minuend[j + 1..i].fill(9);
                10 + diff
            },
            None if i == 0 => diff - 10,
            None => {
                tracing::trace!(column = i, "borrow exhausted the magnitude, forcing sentinel");
                minuend[0] = UNDERFLOW_SENTINEL;
                minuend[1..i].fill(9);
                10 + diff
            },
        };
        minuend[i] = column as i8;
    }
}

/// Normalize the lead digit in place and return the signed overflow.
///
/// A positive lead returns `lead / 10` and keeps `lead % 10`. A negative lead
/// returns `lead / 10` (truncated toward zero) and keeps
/// `10 - |lead| % 10`. An empty slice has no overflow.
pub(crate) fn collect_lead_overflow(digits: &mut [i8]) -> i64 {
    let Some(lead) = digits.first_mut() else {
        return 0;
    };
    let value = i16::from(*lead);
    if value < 0 {
        *lead = (10 - (-value) % 10) as i8;
    } else {
        *lead = (value % 10) as i8;
    }
    i64::from(value / 10)
}
