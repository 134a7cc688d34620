//! Length, index and shape validation for dynmat containers
//!
//! Pure checks with no allocation. Every container operation that can
//! fail runs one of these before touching any storage.

use crate::DynmatError;

/// Validate a requested container length against a ceiling
///
/// Zero is rejected with `InvalidSize`, anything above `max` with
/// `SizeExceeded`. Returns the length unchanged on success.
pub const fn validate_length(length: usize, max: usize) -> Result<usize, DynmatError> {
    if length == 0 {
        return Err(DynmatError::InvalidSize);
    }
    if length > max {
        return Err(DynmatError::SizeExceeded);
    }
    Ok(length)
}

/// Validate an index against a container length
///
/// A single upper-bound check. Negative indices converted to `usize`
/// wrap to large values and fail here as well.
pub const fn validate_index(index: usize, length: usize) -> Result<usize, DynmatError> {
    if index >= length {
        return Err(DynmatError::OutOfRange);
    }
    Ok(index)
}

/// Validate that two operands have the same length
pub const fn validate_same_length(lhs: usize, rhs: usize) -> Result<(), DynmatError> {
    if lhs != rhs {
        return Err(DynmatError::SizeMismatch);
    }
    Ok(())
}
