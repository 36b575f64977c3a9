// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod digit_storage;

pub use digit_storage::{DigitIter, DigitStorage};

pub(crate) use digit_storage::write_digits;
