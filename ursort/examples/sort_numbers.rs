//! Numeric sorting demo: signed integers, floats, and doubles

use std::time::Instant;
use ursort::{RadixSorter, SortKind};

fn main() -> ursort::Result<()> {
    let mut ints = vec![170i32, -45, 75, -9000, 802, -24, 2, 66, 0, -1];
    println!("signed input:      {ints:?}");
    RadixSorter::ascending(SortKind::SignedInteger).sort(&mut ints)?;
    println!("signed ascending:  {ints:?}");
    RadixSorter::descending(SortKind::SignedInteger).sort(&mut ints)?;
    println!("signed descending: {ints:?}");

    let mut floats = vec![3.14f32, -1.25, 0.5, -99.9, 2.0, 0.0, -0.001, 100.0];
    println!("\nfloat input:     {floats:?}");
    RadixSorter::ascending(SortKind::Float32).sort(&mut floats)?;
    println!("float ascending: {floats:?}");

    let mut doubles = vec![2.718281828f64, -1.414213562, 0.0, -0.0, 1.0e300, -1.0e-300];
    println!("\ndouble input:     {doubles:?}");
    RadixSorter::ascending(SortKind::Float64).sort(&mut doubles)?;
    println!("double ascending: {doubles:?}");

    // Timing comparison against the standard library sort
    let big: Vec<i64> = (0..1_000_000i64).map(|i| (i * 2_654_435_761) % 1_000_003 - 500_000).collect();

    let mut radix_data = big.clone();
    let start = Instant::now();
    ursort::sort(&mut radix_data)?;
    let radix_time = start.elapsed();

    let mut std_data = big;
    let start = Instant::now();
    std_data.sort_unstable();
    let std_time = start.elapsed();

    assert_eq!(radix_data, std_data);
    println!("\n1M i64: radix sort {radix_time:?} vs slice::sort_unstable {std_time:?}");
    Ok(())
}
