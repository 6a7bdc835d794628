//! ursort - Universal Radix Sort for Fixed-Width Elements
//!
//! This library sorts arrays of fixed-width elements -- signed integers,
//! IEEE-754 floats and doubles, unsigned integers, and zero-padded byte
//! strings -- with a stable byte-wise counting sort instead of a
//! comparison sort: `O(n * W)` time and `O(n)` extra space for `W`-byte
//! elements.
//!
//! ## Architecture
//!
//! The workspace separates specification from orchestration:
//!
//! - **ursort-core**: pure, `no_std` key transforms, the counting-sort
//!   engine, configuration, and validation (no allocation)
//! - **ursort**: the sort orchestrator owning scratch memory, the
//!   fixed-width string path, and record packing helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use ursort::{RadixSorter, SortKind};
//!
//! let mut data = [170i32, -45, 75, -9000, 802, -24, 2, 66, 0, -1];
//! RadixSorter::ascending(SortKind::SignedInteger).sort(&mut data)?;
//! assert_eq!(data, [-9000, -45, -24, -1, 0, 2, 66, 75, 170, 802]);
//!
//! // Or let the element type pick the kind:
//! let mut floats = [3.14f64, -1.25, 0.5, -99.9];
//! ursort::sort(&mut floats)?;
//! assert_eq!(floats, [-99.9, -1.25, 0.5, 3.14]);
//! # Ok::<(), ursort::SortError>(())
//! ```
//!
//! ## Concurrency
//!
//! A sorter is a plain configuration value with no interior state; every
//! call allocates and frees its own scratch. Independent buffers may be
//! sorted concurrently; one buffer must never be handed to two concurrent
//! calls.

// Re-export core abstractions and configuration
pub use ursort_core::{
    // Configuration
    Direction, PassOrder, SortConfig, SortKind,
    // Typed elements
    SortElement,
    // Error handling
    Result, SortError,
    // Key transform and engine primitives
    codec, engine, validation,
};

// Implementation modules
pub mod sorter;
pub mod strings;

// Public exports
pub use sorter::{sort, sort_descending, RadixSorter};
pub use strings::{fitting_width, pad_to_records, sort_fixed_width, unpack_records};
