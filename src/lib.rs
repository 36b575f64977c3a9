// ============================================================================
// Decimal Digits Library
// Fixed-length decimal digit arrays with explicit overflow reporting
// ============================================================================

//! # Decimal Digits
//!
//! Unsigned decimal integers held as explicit arrays of base-10 digits, the
//! building block for higher-precision decimal arithmetic.
//!
//! ## Features
//!
//! - **Carry/borrow arithmetic** that never changes the array length
//! - **Out-of-band overflow**: carries and borrows past index 0 stay in the
//!   lead digit until the caller collects them
//! - **Zero trimming** from either end
//! - **Packed storage** holding two digits per byte with random-access get/set
//! - **Configurable alignment** for whole numbers or decimal places
//!
//! ## Example
//!
//! ```rust
//! use decimal_digits::prelude::*;
//!
//! // Addition keeps the length; the carry waits in the lead digit
//! let sum = DigitArray::from_integer(75) + DigitArray::from_integer(85);
//! assert_eq!(sum.digits(), &[16, 0]);
//!
//! // Resolve the carry before packing
//! let (normalized, carry) = sum.resolve_overflow().into_parts();
//! assert_eq!(carry, 1);
//!
//! let mut packed = MemoryCompressedDigitArray::try_from(&normalized).unwrap();
//! packed.set(1, 5).unwrap();
//! assert_eq!(packed.to_string(), "65");
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Alignment, ArithmeticConfig};
    pub use crate::interfaces::DigitStorage;
    pub use crate::numeric::{
        DigitArray, DigitError, DigitResult, MemoryCompressedDigitArray, OverflowResolution,
    };
}
