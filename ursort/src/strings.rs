//! Fixed-width byte-string sorting and record packing helpers
//!
//! String mode orders records by plain lexicographic byte comparison over
//! their full fixed width. The engine's counting passes are deliberately
//! not used here: a stable comparison sort over record indices followed by
//! one gather pass satisfies the same total order with far less machinery,
//! and keeps descending order inside the comparator where stability for
//! equal records is preserved.

use ursort_core::{validation, Direction, Result, SortError};

/// Stably sort fixed-width byte records in lexicographic order
///
/// All `width` bytes of each record participate in the comparison, so the
/// caller's zero padding must be consistent. Equal records keep their
/// relative input order in both directions.
pub fn sort_fixed_width(slab: &mut [u8], width: usize, direction: Direction) -> Result<()> {
    let count = validation::record_count(slab.len(), width)?;
    if count <= 1 {
        return Ok(());
    }

    let mut order = Vec::new();
    order
        .try_reserve_exact(count)
        .map_err(|_| SortError::AllocationFailure)?;
    order.extend(0..count);

    // Sort indices, not records: one comparator call never moves data, and
    // the stable slice sort gives the equal-record guarantee for free.
    match direction {
        Direction::Ascending => order.sort_by(|&a: &usize, &b: &usize| {
            slab[a * width..(a + 1) * width].cmp(&slab[b * width..(b + 1) * width])
        }),
        Direction::Descending => order.sort_by(|&a: &usize, &b: &usize| {
            slab[b * width..(b + 1) * width].cmp(&slab[a * width..(a + 1) * width])
        }),
    }

    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(slab.len())
        .map_err(|_| SortError::AllocationFailure)?;
    for &i in &order {
        scratch.extend_from_slice(&slab[i * width..(i + 1) * width]);
    }
    slab.copy_from_slice(&scratch);

    Ok(())
}

/// Get the smallest record width that fits every string plus a terminator
pub fn fitting_width<S: AsRef<str>>(strings: &[S]) -> usize {
    strings
        .iter()
        .map(|s| s.as_ref().len())
        .max()
        .unwrap_or(0)
        + 1
}

/// Pack strings into zero-padded fixed-width records
///
/// Each string must leave room for at least one trailing zero byte inside
/// the record, so the packed record compares like a terminated string;
/// strings of `width` bytes or longer fail with `InvalidElementSize`.
pub fn pad_to_records<S: AsRef<str>>(strings: &[S], width: usize) -> Result<Vec<u8>> {
    if width == 0 {
        return Err(SortError::InvalidElementSize);
    }

    let total = strings
        .len()
        .checked_mul(width)
        .ok_or(SortError::AllocationFailure)?;
    let mut slab = Vec::new();
    slab.try_reserve_exact(total)
        .map_err(|_| SortError::AllocationFailure)?;

    for s in strings {
        let bytes = s.as_ref().as_bytes();
        if bytes.len() >= width {
            return Err(SortError::InvalidElementSize);
        }
        slab.extend_from_slice(bytes);
        slab.resize(slab.len() + (width - bytes.len()), 0);
    }

    Ok(slab)
}

/// Unpack fixed-width records back into strings, trimming zero padding
///
/// Inverse of [`pad_to_records`] for records holding valid UTF-8; bytes
/// that fail UTF-8 decoding are replaced, matching `String::from_utf8_lossy`.
pub fn unpack_records(slab: &[u8], width: usize) -> Result<Vec<String>> {
    let count = validation::record_count(slab.len(), width)?;
    let mut strings = Vec::new();
    strings
        .try_reserve_exact(count)
        .map_err(|_| SortError::AllocationFailure)?;

    for record in slab.chunks_exact(width) {
        let end = record.iter().position(|&b| b == 0).unwrap_or(width);
        strings.push(String::from_utf8_lossy(&record[..end]).into_owned());
    }

    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_and_unpack_round_trip() {
        let strings = ["banana", "apple", "fig"];
        let width = fitting_width(&strings);
        assert_eq!(width, 7);

        let slab = pad_to_records(&strings, width).unwrap();
        assert_eq!(slab.len(), 3 * width);
        assert_eq!(unpack_records(&slab, width).unwrap(), strings);
    }

    #[test]
    fn test_pad_requires_terminator_room() {
        assert_eq!(
            pad_to_records(&["toolong"], 7),
            Err(SortError::InvalidElementSize)
        );
        assert!(pad_to_records(&["toolong"], 8).is_ok());
    }

    #[test]
    fn test_descending_orders_duplicates_together() {
        let mut slab = pad_to_records(&["kiwi", "kiwi", "apple"], 6).unwrap();
        sort_fixed_width(&mut slab, 6, Direction::Descending).unwrap();
        assert_eq!(
            unpack_records(&slab, 6).unwrap(),
            ["kiwi", "kiwi", "apple"]
        );
    }

    #[test]
    fn test_full_width_participates_in_comparison() {
        // "ab\0x" differs from "ab\0y" only after the terminator; the sort
        // still orders by the padding bytes.
        let mut slab = vec![b'a', b'b', 0, b'y', b'a', b'b', 0, b'x'];
        sort_fixed_width(&mut slab, 4, Direction::Ascending).unwrap();
        assert_eq!(slab, [b'a', b'b', 0, b'x', b'a', b'b', 0, b'y']);
    }
}
