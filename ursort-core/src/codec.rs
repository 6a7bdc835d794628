//! Key transform: bijective mappings from native bit patterns to unsigned,
//! order-preserving patterns
//!
//! This module is the only place raw bit manipulation occurs. Every
//! transform is a total bijection on the representable bit patterns and
//! allocates nothing. After a forward transform, unsigned byte-wise
//! comparison of two records agrees with the numeric order of the original
//! values; the matching decode restores every record bit-for-bit.
//!
//! The slab functions operate in place on whole-record byte slabs in
//! native byte order, so callers never need an aligned view of the data.

/// Sign bit of an IEEE-754 single-precision pattern
pub const F32_SIGN_MASK: u32 = 0x8000_0000;

/// Sign bit of an IEEE-754 double-precision pattern
pub const F64_SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// Physical byte offset of the digit with the given significance rank
/// (0 = least significant) inside one native-endian numeric record
///
/// Identity on little-endian targets, mirrored on big-endian ones. The
/// counting engine works in physical offsets and stays layout-agnostic;
/// this mapping is the single place that knows where significance lives.
pub const fn digit_offset(width: usize, rank: usize) -> usize {
    if cfg!(target_endian = "little") {
        rank
    } else {
        width - 1 - rank
    }
}

/// Map one f32 bit pattern to its unsigned order-preserving key
///
/// Negative patterns (sign bit set) take a full ones'-complement, which
/// clears the sign bit and reverses the magnitude order among negatives.
/// Non-negative patterns flip only the sign bit, placing them above every
/// transformed negative. NaN patterns pass through the same branches and
/// sort by bit pattern; their position carries no IEEE semantics.
pub const fn encode_f32_pattern(bits: u32) -> u32 {
    if bits & F32_SIGN_MASK != 0 {
        !bits
    } else {
        bits ^ F32_SIGN_MASK
    }
}

/// Invert [`encode_f32_pattern`]
///
/// The branch is taken on the *current* sign bit: a set bit means the
/// original was non-negative (the forward transform set it), so only the
/// sign bit is flipped back; a clear bit means the original was negative
/// and the full complement is undone.
pub const fn decode_f32_pattern(bits: u32) -> u32 {
    if bits & F32_SIGN_MASK != 0 {
        bits ^ F32_SIGN_MASK
    } else {
        !bits
    }
}

/// Map one f64 bit pattern to its unsigned order-preserving key
///
/// Same mapping as [`encode_f32_pattern`] over 64-bit patterns.
pub const fn encode_f64_pattern(bits: u64) -> u64 {
    if bits & F64_SIGN_MASK != 0 {
        !bits
    } else {
        bits ^ F64_SIGN_MASK
    }
}

/// Invert [`encode_f64_pattern`]
pub const fn decode_f64_pattern(bits: u64) -> u64 {
    if bits & F64_SIGN_MASK != 0 {
        bits ^ F64_SIGN_MASK
    } else {
        !bits
    }
}

/// Transform two's-complement records into unsigned order-preserving keys
///
/// Flips the sign bit of each record's most-significant byte. Negative
/// values (sign bit 1) land below non-negative values (sign bit 0) under
/// unsigned comparison once the bit is flipped. Works for any record
/// width, so a single routine covers i8 through i64.
///
/// The flip is self-inverse: [`decode_signed`] is the identical operation.
pub fn encode_signed(slab: &mut [u8], width: usize) {
    debug_assert!(width > 0 && slab.len() % width == 0);
    let msb = digit_offset(width, width - 1);
    for record in slab.chunks_exact_mut(width) {
        record[msb] ^= 0x80;
    }
}

/// Restore two's-complement records after sorting
pub fn decode_signed(slab: &mut [u8], width: usize) {
    encode_signed(slab, width);
}

/// Transform a slab of native-endian f32 records in place
pub fn encode_f32_slab(slab: &mut [u8]) {
    debug_assert_eq!(slab.len() % 4, 0);
    for record in slab.chunks_exact_mut(4) {
        let bits = u32::from_ne_bytes([record[0], record[1], record[2], record[3]]);
        record.copy_from_slice(&encode_f32_pattern(bits).to_ne_bytes());
    }
}

/// Restore a slab of native-endian f32 records after sorting
pub fn decode_f32_slab(slab: &mut [u8]) {
    debug_assert_eq!(slab.len() % 4, 0);
    for record in slab.chunks_exact_mut(4) {
        let bits = u32::from_ne_bytes([record[0], record[1], record[2], record[3]]);
        record.copy_from_slice(&decode_f32_pattern(bits).to_ne_bytes());
    }
}

/// Transform a slab of native-endian f64 records in place
pub fn encode_f64_slab(slab: &mut [u8]) {
    debug_assert_eq!(slab.len() % 8, 0);
    for record in slab.chunks_exact_mut(8) {
        let bits = u64::from_ne_bytes([
            record[0], record[1], record[2], record[3], record[4], record[5], record[6], record[7],
        ]);
        record.copy_from_slice(&encode_f64_pattern(bits).to_ne_bytes());
    }
}

/// Restore a slab of native-endian f64 records after sorting
pub fn decode_f64_slab(slab: &mut [u8]) {
    debug_assert_eq!(slab.len() % 8, 0);
    for record in slab.chunks_exact_mut(8) {
        let bits = u64::from_ne_bytes([
            record[0], record[1], record[2], record[3], record[4], record[5], record[6], record[7],
        ]);
        record.copy_from_slice(&decode_f64_pattern(bits).to_ne_bytes());
    }
}
