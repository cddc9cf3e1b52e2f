use rle_bitmap::{BitmapConfig, BitmapError, RleBitmap};

fn main() {
    println!("=== RLE Bitmap Examples ===\n");

    // Example 1: Reading and writing bits
    let _ = example_get_set();

    // Example 2: Eviction and write-back
    let _ = example_write_back();

    // Example 3: Memory comparison
    let _ = example_memory_savings();
}

fn example_get_set() -> Result<(), BitmapError> {
    println!("Example 1: Marking cells in a 32x8 mask");

    let mut mask = RleBitmap::new(32, 8)?;
    mask.set(3, 2, true)?;
    mask.set(4, 2, true)?;

    println!("  (3, 2) = {}", mask.get(3, 2)?);
    println!("  (5, 2) = {}", mask.get(5, 2)?);
    println!("  Row 2 has {} set bits", mask.count_ones_in_row(2)?);
    println!();

    Ok(())
}

fn example_write_back() -> Result<(), BitmapError> {
    println!("Example 2: Dirty rows are encoded when evicted");

    let config = BitmapConfig::new(16, 4).with_cache_max_items(1);
    let mut mask = RleBitmap::with_config(config)?;

    mask.set(0, 0, true)?;
    println!("  Row 0 cached: {}", mask.is_cached(0));

    // Only one row fits, so touching row 1 pushes row 0 back to the store
    mask.get(0, 1)?;
    println!("  Row 0 cached after reading row 1: {}", mask.is_cached(0));
    println!("  (0, 0) read back from the store: {}", mask.get(0, 0)?);
    println!("  {:?}", mask.cache_stats());
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), BitmapError> {
    println!("Example 3: Memory savings comparison");

    let (width, height) = (10_000, 1_000);
    let mut mask = RleBitmap::new(width, height)?;

    // A filled rectangle in an otherwise empty mask
    for y in 400..600 {
        for x in 2_000..3_000 {
            mask.set(x, y, true)?;
        }
    }
    mask.flush_changes()?;

    let dense_bytes = width * height / 8;
    let encoded_bytes = mask.encoded_bytes();
    let savings = 100.0 * (1.0 - (encoded_bytes as f64 / dense_bytes as f64));

    println!("  Storing a {}x{} mask:", width, height);
    println!("  Dense bits: {} bytes", dense_bytes);
    println!("  Encoded:    {} bytes", encoded_bytes);
    println!("  Savings:    {:.1}%", savings);

    Ok(())
}
