//! Element type constraints for typed sorting
//!
//! This module defines the trait that maps native scalar types onto the
//! sort kinds the engine understands, so typed callers never spell out a
//! kind code by hand.

use crate::config::SortKind;

/// Trait for scalar types that can be sorted by value
///
/// Implementors must be plain-old-data (`bytemuck::Pod`) so a slice of
/// them can be viewed as the byte slab the engine operates on. The
/// associated kind selects the key transform that makes the type's bit
/// pattern order-preserving under unsigned byte comparison.
pub trait SortElement: bytemuck::Pod {
    /// Get the sort kind for this element type
    fn sort_kind() -> SortKind;

    /// Get the size in bytes of this element type
    fn width() -> usize {
        core::mem::size_of::<Self>()
    }
}

// Unsigned integers are their own order-preserving keys

impl SortElement for u8 {
    fn sort_kind() -> SortKind {
        SortKind::RawBytes
    }
}

impl SortElement for u16 {
    fn sort_kind() -> SortKind {
        SortKind::RawBytes
    }
}

impl SortElement for u32 {
    fn sort_kind() -> SortKind {
        SortKind::RawBytes
    }
}

impl SortElement for u64 {
    fn sort_kind() -> SortKind {
        SortKind::RawBytes
    }
}

// Signed integers need the sign-bit flip

impl SortElement for i8 {
    fn sort_kind() -> SortKind {
        SortKind::SignedInteger
    }
}

impl SortElement for i16 {
    fn sort_kind() -> SortKind {
        SortKind::SignedInteger
    }
}

impl SortElement for i32 {
    fn sort_kind() -> SortKind {
        SortKind::SignedInteger
    }
}

impl SortElement for i64 {
    fn sort_kind() -> SortKind {
        SortKind::SignedInteger
    }
}

// Floats need the sign-dependent complement

impl SortElement for f32 {
    fn sort_kind() -> SortKind {
        SortKind::Float32
    }
}

impl SortElement for f64 {
    fn sort_kind() -> SortKind {
        SortKind::Float64
    }
}
