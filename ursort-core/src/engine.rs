//! Byte-wise counting-sort engine over fixed-width records
//!
//! The engine is kind-agnostic: it sees only a byte slab, a record width,
//! and byte offsets. One pass stably sorts all records by a single byte
//! position in `O(n)` time against a 256-entry alphabet; a full sort runs
//! one pass per byte position. Scratch memory is caller-owned, so the
//! engine itself never allocates and independent calls share no state.

use crate::codec::digit_offset;
use crate::config::PassOrder;

/// Number of distinct byte values, and thus histogram buckets, per pass
pub const RADIX: usize = 256;

/// Stably sort `src` into `dst` by the byte at `offset` within each record
///
/// Builds a 256-bucket histogram, converts it to cumulative bucket ends,
/// then scans records in reverse index order, decrementing a record's
/// bucket counter to obtain its output slot. The reverse scan combined
/// with decrementing counters is what keeps equal-keyed records in their
/// relative input order.
pub fn counting_sort_pass(src: &[u8], dst: &mut [u8], width: usize, offset: usize) {
    debug_assert!(width > 0 && offset < width);
    debug_assert_eq!(src.len(), dst.len());
    debug_assert_eq!(src.len() % width, 0);

    let count = src.len() / width;
    let mut histogram = [0usize; RADIX];

    for i in 0..count {
        let byte = src[i * width + offset];
        histogram[byte as usize] += 1;
    }

    for bucket in 1..RADIX {
        histogram[bucket] += histogram[bucket - 1];
    }

    for i in (0..count).rev() {
        let byte = src[i * width + offset];
        histogram[byte as usize] -= 1;
        let slot = histogram[byte as usize];
        dst[slot * width..(slot + 1) * width].copy_from_slice(&src[i * width..(i + 1) * width]);
    }
}

/// Run one counting-sort pass per byte position over the whole slab
///
/// Passes ping-pong between the caller's slab and the caller-supplied
/// scratch slab; when the last pass lands in scratch, a single copy moves
/// the result back. `LsbFirst` walks significance ranks low to high, which
/// is the composition that yields a total order for multi-byte keys.
/// `MsbFirst` walks high to low and, for multi-byte numeric keys, yields
/// digit-order rather than value-order; it exists because raw-byte callers
/// may want the per-digit grouping it produces.
pub fn radix_sort_slab(slab: &mut [u8], scratch: &mut [u8], width: usize, pass_order: PassOrder) {
    debug_assert_eq!(slab.len(), scratch.len());

    let mut in_slab = true;
    for pass in 0..width {
        let rank = match pass_order {
            PassOrder::LsbFirst => pass,
            PassOrder::MsbFirst => width - 1 - pass,
        };
        let offset = digit_offset(width, rank);
        if in_slab {
            counting_sort_pass(slab, scratch, width, offset);
        } else {
            counting_sort_pass(scratch, slab, width, offset);
        }
        in_slab = !in_slab;
    }

    if !in_slab {
        slab.copy_from_slice(scratch);
    }
}

/// Reverse the record order of a slab in place
///
/// Used to turn an ascending numeric result into the descending one; the
/// ascending order is a strict total order, so its reversal is exactly the
/// descending order.
pub fn reverse_records(slab: &mut [u8], width: usize) {
    debug_assert!(width > 0 && slab.len() % width == 0);
    let count = slab.len() / width;
    for i in 0..count / 2 {
        let j = count - 1 - i;
        for b in 0..width {
            slab.swap(i * width + b, j * width + b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_is_stable() {
        // Two-byte records: key byte at offset 0, payload tag at offset 1.
        // Equal keys must keep their input order.
        let src = [
            5u8, 0, //
            1, 1, //
            5, 2, //
            1, 3, //
            0, 4,
        ];
        let mut dst = [0u8; 10];
        counting_sort_pass(&src, &mut dst, 2, 0);
        assert_eq!(dst, [0, 4, 1, 1, 1, 3, 5, 0, 5, 2]);
    }

    #[test]
    fn test_lsb_first_sorts_multi_byte_keys() {
        let values: [u32; 8] = [
            0xDEAD_BEEF,
            0,
            1,
            0x0000_FF00,
            u32::MAX,
            0x1234_5678,
            0x1234_0000,
            7,
        ];
        let mut slab = [0u8; 32];
        for (i, v) in values.iter().enumerate() {
            slab[i * 4..(i + 1) * 4].copy_from_slice(&v.to_ne_bytes());
        }
        let mut scratch = [0u8; 32];
        radix_sort_slab(&mut slab, &mut scratch, 4, PassOrder::LsbFirst);

        let mut sorted = values;
        sorted.sort_unstable();
        for (i, v) in sorted.iter().enumerate() {
            let mut record = [0u8; 4];
            record.copy_from_slice(&slab[i * 4..(i + 1) * 4]);
            assert_eq!(u32::from_ne_bytes(record), *v);
        }
    }

    #[test]
    fn test_odd_pass_count_lands_back_in_slab() {
        // Three-byte records force the final ping-pong copy-back.
        let mut slab = [
            9u8, 0, 0, //
            2, 0, 0, //
            5, 0, 0,
        ];
        let mut scratch = [0u8; 9];
        radix_sort_slab(&mut slab, &mut scratch, 3, PassOrder::LsbFirst);
        assert_eq!(slab, [2, 0, 0, 5, 0, 0, 9, 0, 0]);
    }

    #[test]
    fn test_reverse_records() {
        let mut slab = [1u8, 2, 3, 4, 5, 6];
        reverse_records(&mut slab, 2);
        assert_eq!(slab, [5, 6, 3, 4, 1, 2]);

        let mut odd = [1u8, 2, 3];
        reverse_records(&mut odd, 1);
        assert_eq!(odd, [3, 2, 1]);
    }
}
