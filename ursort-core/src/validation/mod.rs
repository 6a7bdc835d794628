//! Pure validation functions for sort inputs
//!
//! All checks here are mathematical and I/O-free; they run before the
//! first byte of a caller's buffer is touched.

pub mod kind;
pub mod records;

pub use kind::*;
pub use records::*;
