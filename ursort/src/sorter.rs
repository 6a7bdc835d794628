//! Sort orchestrator: validation, scratch ownership, and pipeline dispatch
//!
//! The orchestrator owns the full lifecycle of one sort call: it resolves
//! and validates the configuration, allocates the call-scoped scratch slab,
//! runs the key transform, the counting-sort passes, the inverse transform,
//! and the optional descending reversal. Every failure is reported before
//! the first byte of the caller's buffer is written, so a failed call
//! leaves the input untouched.

use bytemuck::Pod;
use ursort_core::{
    codec, engine, validation, Direction, PassOrder, Result, SortConfig, SortElement, SortError,
    SortKind,
};

use crate::strings;

/// Radix sorter for fixed-width elements
///
/// A sorter is a reusable configuration value; it holds no buffers and no
/// state between calls. Each call allocates its own scratch slab and frees
/// it on return, so independent sorters (or one sorter used from several
/// threads on independent buffers) never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixSorter {
    config: SortConfig,
}

impl RadixSorter {
    /// Create a sorter from an explicit configuration
    pub const fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Create an ascending sorter for the given kind with the numeric
    /// default pass order
    pub const fn ascending(kind: SortKind) -> Self {
        Self::new(SortConfig::new(kind, PassOrder::LsbFirst, Direction::Ascending))
    }

    /// Create a descending sorter for the given kind with the numeric
    /// default pass order
    pub const fn descending(kind: SortKind) -> Self {
        Self::new(SortConfig::new(kind, PassOrder::LsbFirst, Direction::Descending))
    }

    /// Override the byte-pass order
    ///
    /// `RawBytes` + `MsbFirst` selects the dedicated fixed-width string
    /// path. For numeric kinds `MsbFirst` yields digit-order rather than
    /// value-order and is almost never what a caller wants.
    pub const fn with_pass_order(mut self, pass_order: PassOrder) -> Self {
        self.config = SortConfig::from_raw(
            self.config.kind_code(),
            pass_order,
            self.config.direction(),
        );
        self
    }

    /// Get the sorter's configuration
    pub const fn config(&self) -> SortConfig {
        self.config
    }

    /// Sort a slice of fixed-width values in place
    ///
    /// The element width is taken from `T`; the configured kind decides how
    /// each element's bit pattern is interpreted. Sorting zero or one
    /// element succeeds without touching the configuration.
    pub fn sort<T: Pod>(&self, values: &mut [T]) -> Result<()> {
        if values.len() <= 1 || core::mem::size_of::<T>() == 0 {
            return Ok(());
        }
        self.sort_slab(bytemuck::cast_slice_mut(values), core::mem::size_of::<T>())
    }

    /// Sort an optional raw record slab in place
    ///
    /// Entry point for callers that carry their buffer as an optional
    /// handle: an absent slab with `count > 0` fails with
    /// [`SortError::NullBuffer`], while an absent slab with `count == 0`
    /// is a successful no-op. `count` and `width` must describe the slab
    /// exactly.
    pub fn sort_records(
        &self,
        records: Option<&mut [u8]>,
        count: usize,
        width: usize,
    ) -> Result<()> {
        let slab = match records {
            Some(slab) => slab,
            None if count == 0 => return Ok(()),
            None => return Err(SortError::NullBuffer),
        };

        let expected = count
            .checked_mul(width)
            .ok_or(SortError::InvalidElementSize)?;
        if slab.len() != expected {
            return Err(SortError::InvalidElementSize);
        }

        if count <= 1 {
            return Ok(());
        }
        self.sort_slab(slab, width)
    }

    /// Run the full pipeline over a validated, non-trivial slab
    fn sort_slab(&self, slab: &mut [u8], width: usize) -> Result<()> {
        let count = validation::record_count(slab.len(), width)?;
        if count <= 1 {
            return Ok(());
        }

        let kind = self.config.kind()?;
        validation::validate_kind_width(kind, width)?;

        // String mode: direct lexicographic ordering, no transform, no
        // byte-wise passes. Descending is handled by the comparator there,
        // never by reversing a stable result.
        if kind == SortKind::RawBytes && self.config.pass_order() == PassOrder::MsbFirst {
            return strings::sort_fixed_width(slab, width, self.config.direction());
        }

        let mut scratch = alloc_scratch(slab.len())?;

        match kind {
            SortKind::RawBytes => {}
            SortKind::SignedInteger => codec::encode_signed(slab, width),
            SortKind::Float32 => codec::encode_f32_slab(slab),
            SortKind::Float64 => codec::encode_f64_slab(slab),
        }

        engine::radix_sort_slab(slab, &mut scratch, width, self.config.pass_order());

        match kind {
            SortKind::RawBytes => {}
            SortKind::SignedInteger => codec::decode_signed(slab, width),
            SortKind::Float32 => codec::decode_f32_slab(slab),
            SortKind::Float64 => codec::decode_f64_slab(slab),
        }

        if self.config.direction() == Direction::Descending {
            engine::reverse_records(slab, width);
        }

        Ok(())
    }
}

/// Allocate the call-scoped scratch slab, surfacing allocator refusal as
/// [`SortError::AllocationFailure`] instead of aborting
fn alloc_scratch(len: usize) -> Result<Vec<u8>> {
    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|_| SortError::AllocationFailure)?;
    scratch.resize(len, 0);
    Ok(scratch)
}

/// Sort a slice of scalar values in ascending order
///
/// Convenience wrapper that derives the kind from the element type.
pub fn sort<T: SortElement>(values: &mut [T]) -> Result<()> {
    RadixSorter::ascending(T::sort_kind()).sort(values)
}

/// Sort a slice of scalar values in descending order
pub fn sort_descending<T: SortElement>(values: &mut [T]) -> Result<()> {
    RadixSorter::descending(T::sort_kind()).sort(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_lengths_skip_validation() {
        // An undefined kind code must not fail while there is nothing to
        // order.
        let bad = RadixSorter::new(SortConfig::from_raw(
            42,
            PassOrder::LsbFirst,
            Direction::Ascending,
        ));
        let mut empty: [i32; 0] = [];
        let mut single = [7i32];
        assert_eq!(bad.sort(&mut empty), Ok(()));
        assert_eq!(bad.sort(&mut single), Ok(()));
        assert_eq!(single, [7]);
    }

    #[test]
    fn test_null_records_contract() {
        let sorter = RadixSorter::ascending(SortKind::RawBytes);
        assert_eq!(sorter.sort_records(None, 0, 4), Ok(()));
        assert_eq!(
            sorter.sort_records(None, 3, 4),
            Err(SortError::NullBuffer)
        );
    }

    #[test]
    fn test_mismatched_slab_shape_is_rejected() {
        let sorter = RadixSorter::ascending(SortKind::RawBytes);
        let mut slab = [0u8; 10];
        assert_eq!(
            sorter.sort_records(Some(&mut slab), 3, 4),
            Err(SortError::InvalidElementSize)
        );
    }

    #[test]
    fn test_failed_call_leaves_buffer_unmodified() {
        let sorter = RadixSorter::ascending(SortKind::Float64);
        let mut values = [3i32, 1, 2];
        assert_eq!(sorter.sort(&mut values), Err(SortError::InvalidElementSize));
        assert_eq!(values, [3, 1, 2]);
    }
}
