//! Kind and element-width compatibility checks

use crate::config::SortKind;
use crate::{Result, SortError};

/// Validate that an element width is compatible with the configured kind
///
/// The floating-point kinds pin the width to their IEEE-754 storage size;
/// integer and raw-byte kinds accept any nonzero fixed width.
pub const fn validate_kind_width(kind: SortKind, width: usize) -> Result<()> {
    if width == 0 {
        return Err(SortError::InvalidElementSize);
    }
    match kind.required_width() {
        Some(required) if required != width => Err(SortError::InvalidElementSize),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_kinds_pin_width() {
        assert_eq!(validate_kind_width(SortKind::Float32, 4), Ok(()));
        assert_eq!(
            validate_kind_width(SortKind::Float32, 8),
            Err(SortError::InvalidElementSize)
        );
        assert_eq!(validate_kind_width(SortKind::Float64, 8), Ok(()));
        assert_eq!(
            validate_kind_width(SortKind::Float64, 4),
            Err(SortError::InvalidElementSize)
        );
    }

    #[test]
    fn test_flexible_kinds_accept_any_nonzero_width() {
        for width in [1usize, 2, 4, 8, 16, 33] {
            assert_eq!(validate_kind_width(SortKind::RawBytes, width), Ok(()));
            assert_eq!(validate_kind_width(SortKind::SignedInteger, width), Ok(()));
        }
        assert_eq!(
            validate_kind_width(SortKind::RawBytes, 0),
            Err(SortError::InvalidElementSize)
        );
    }
}
