// ============================================================================
// Numeric Module
// Fixed-length decimal digit arithmetic and packed digit storage
// ============================================================================
//
// This module provides:
// - DigitArray: one digit per byte, carry/borrow arithmetic, zero trimming
// - MemoryCompressedDigitArray: two digits per byte, random-access get/set
// - OverflowResolution: tagged outcome of normalizing the lead digit
// - DigitError: Error types for construction, arithmetic and packing
//
// Design principles:
// - Arithmetic never changes the array length
// - Carries and borrows past index 0 stay visible in the lead digit
// - Fallible operations return Result (operators panic only on misuse)
// - Nibbles are extracted with masks, never sign extension

mod carry;
mod compressed;
mod digit_array;
mod errors;
mod overflow;

pub use carry::UNDERFLOW_SENTINEL;
pub use compressed::MemoryCompressedDigitArray;
pub use digit_array::{DigitArray, INLINE_DIGITS};
pub use errors::{DigitError, DigitResult};
pub use overflow::OverflowResolution;
