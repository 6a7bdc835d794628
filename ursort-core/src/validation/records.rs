//! Record-slab size validation

use crate::{Result, SortError};

/// Validate that a byte slab describes whole records of the given width
///
/// Returns the record count. Rejects slabs whose length is not a multiple
/// of the width, and applies a conservative overflow guard so downstream
/// offset arithmetic (`count * width`) cannot wrap.
pub const fn record_count(byte_len: usize, width: usize) -> Result<usize> {
    if width == 0 || byte_len % width != 0 {
        return Err(SortError::InvalidElementSize);
    }

    let count = byte_len / width;
    if count > usize::MAX / 8 {
        return Err(SortError::AllocationFailure);
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_count() {
        assert_eq!(record_count(16, 4), Ok(4));
        assert_eq!(record_count(24, 8), Ok(3));
        assert_eq!(record_count(0, 4), Ok(0));

        assert_eq!(record_count(15, 4), Err(SortError::InvalidElementSize));
        assert_eq!(record_count(23, 8), Err(SortError::InvalidElementSize));
        assert_eq!(record_count(10, 0), Err(SortError::InvalidElementSize));
    }
}
