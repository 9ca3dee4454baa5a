use packed_bit_sequence::{BitSequenceError, PackedBitSequence};

fn main() {
    println!("=== Packed Bit Sequence Examples ===\n");

    // Example 1: Editing a sequence
    let _ = example_editing();

    // Example 2: Set algebra on feature masks
    let _ = example_masks();

    // Example 3: Interchange formats
    let _ = example_interchange();

    // Example 4: Memory comparison
    example_memory_savings();
}

fn example_editing() -> Result<(), BitSequenceError> {
    println!("Example 1: Editing a sequence");

    let mut bits = PackedBitSequence::from_binary_str("011")?;
    bits.insert(0, 1)?;
    println!("  After insert:   {}", bits);

    bits.extend("0011")?;
    println!("  After extend:   {}", bits);

    let removed = bits.pop(None)?;
    println!("  Popped {} -> {}", removed, bits);

    bits.rotate(2);
    println!("  Rotated right:  {}", bits);
    println!();

    Ok(())
}

fn example_masks() -> Result<(), BitSequenceError> {
    println!("Example 2: Feature masks");

    let enabled: PackedBitSequence = "1101001".parse()?;
    let licensed: PackedBitSequence = "1011011".parse()?;

    println!("  enabled & licensed: {}", &enabled & &licensed);
    println!("  enabled | licensed: {}", &enabled | &licensed);
    println!("  enabled ^ licensed: {}", &enabled ^ &licensed);
    println!("  !enabled:           {}", !&enabled);
    println!(
        "  {} of {} features on, parity {}",
        enabled.count_ones(),
        enabled.len(),
        enabled.parity()
    );
    println!();

    Ok(())
}

fn example_interchange() -> Result<(), BitSequenceError> {
    println!("Example 3: Interchange formats");

    let value = PackedBitSequence::from_integer(0xBEEFu32, Some(20))?;
    println!("  binary:  {}", value);
    println!("  hex:     {}", value.to_hex());
    println!("  bytes:   {:?}", value.as_bytes());
    println!("  integer: {:#x}", value.to_integer());

    let restored = PackedBitSequence::from_hex(&value.to_hex())?;
    println!("  restored from hex has {} bits (byte form drops the length)", restored.len());
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 4: Memory savings comparison");

    let count = 10_000;

    // Vec<bool>
    let standard_bytes = count;

    let packed = PackedBitSequence::random(count);
    let packed_bytes = packed.as_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} bits:", count);
    println!("  Vec<bool>: {} bytes", standard_bytes);
    println!("  Packed:    {} bytes", packed_bytes);
    println!("  Savings:   {:.1}%", savings);
}
