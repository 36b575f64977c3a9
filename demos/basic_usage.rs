// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_digits::numeric::UNDERFLOW_SENTINEL;
use decimal_digits::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Decimal Digits Example ===\n");

    // Addition keeps the length fixed
    let a = DigitArray::from_integer(462);
    let b = DigitArray::from_integer(999);
    let sum = &a + &b;
    println!("{} + {} = {:?} (overflowing: {})", a, b, sum, sum.is_lead_digit_overflowing());

    // Packing refuses the unresolved carry
    match MemoryCompressedDigitArray::try_from(&sum) {
        Ok(packed) => println!("Packed: {}", packed),
        Err(err) => println!("Cannot pack yet: {}", err),
    }

    // Resolve it, then prepend the carry ourselves
    let (normalized, carry) = sum.resolve_overflow().into_parts();
    println!("Carry {} with remainder {}\n", carry, normalized);

    // Subtraction that runs out of magnitude
    let difference = DigitArray::new(&[0, 0, 1]) - DigitArray::new(&[0, 0, 2]);
    println!(
        "001 - 002 = {:?} (sentinel lead: {})",
        difference,
        difference.get(0) == Some(UNDERFLOW_SENTINEL)
    );
    match difference.resolve_overflow() {
        OverflowResolution::Normalized(array) => println!("No borrow: {}", array),
        OverflowResolution::Overflow { magnitude, array } => {
            println!("Borrowed {} x 10^{}: remainder {}\n", magnitude, array.size(), array)
        },
    }

    // Decimal places: align at the first digit
    let config = ArithmeticConfig::decimal_places();
    let fraction_a = DigitArray::from_string(".75");
    let fraction_b = DigitArray::from_string(".5");
    let fraction_sum = fraction_a
        .add_with(&fraction_b, &config)
        .expect("lenient addition never fails");
    println!(".75 + .5 = {:?}", fraction_sum);

    // Packed storage with in-place updates
    let mut packed = MemoryCompressedDigitArray::try_from(&normalized).expect("normalized digits");
    println!(
        "\nPacked {} digits into {} bytes: {:02x?}",
        packed.digit_count(),
        packed.array_size(),
        packed.as_bytes()
    );
    if let Err(err) = packed.set(0, 12) {
        println!("Rejected write: {}", err);
    }
    packed.set(0, 9).expect("index 0 holds a digit");
    println!("After set(0, 9): {}", packed);

    println!("\n=== Example Complete ===");
}
