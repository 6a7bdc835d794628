//! Fixed-width string sorting demo with padding helpers

use ursort::{fitting_width, pad_to_records, unpack_records, Direction};

fn main() -> ursort::Result<()> {
    let words = ["banana", "apple", "zebra", "fig", "grapefruit", "cherry"];
    let width = fitting_width(&words);
    println!("input:  {words:?} (record width {width})");

    let mut slab = pad_to_records(&words, width)?;
    ursort::sort_fixed_width(&mut slab, width, Direction::Ascending)?;
    println!("ascending:  {:?}", unpack_records(&slab, width)?);

    let mut slab = pad_to_records(&words, width)?;
    ursort::sort_fixed_width(&mut slab, width, Direction::Descending)?;
    println!("descending: {:?}", unpack_records(&slab, width)?);

    Ok(())
}
