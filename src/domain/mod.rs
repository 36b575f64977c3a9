// ============================================================================
// Domain Configuration Module
// Settings that shape how digit arrays are combined
// ============================================================================

pub mod config;

pub use config::{Alignment, ArithmeticConfig};
