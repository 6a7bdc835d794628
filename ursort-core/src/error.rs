//! Error types for sort operations

/// Errors that can occur during a sort call
///
/// The taxonomy is flat: every failure maps to exactly one kind and no
/// failure carries a nested cause. All failures are detected before the
/// first byte of the caller's buffer is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Buffer handle missing while a nonzero element count was requested
    NullBuffer,
    /// Element width incompatible with the configured kind
    InvalidElementSize,
    /// Configuration names a kind code outside the defined set
    UnsupportedKind,
    /// Scratch memory could not be obtained
    AllocationFailure,
}

impl core::fmt::Display for SortError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SortError::NullBuffer => "Buffer is absent but a nonzero count was requested",
            SortError::InvalidElementSize => "Element size does not match the configured kind",
            SortError::UnsupportedKind => "Unsupported sort kind code",
            SortError::AllocationFailure => "Failed to allocate scratch memory",
        };
        write!(f, "{msg}")
    }
}

/// Result type for sort operations
pub type Result<T> = core::result::Result<T, SortError>;
