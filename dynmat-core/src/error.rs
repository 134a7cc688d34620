//! Error types for dynmat container operations

/// Errors that can occur during sequence and grid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynmatError {
    /// Requested length or dimension is zero
    InvalidSize,
    /// Requested length or dimension exceeds the configured ceiling
    SizeExceeded,
    /// Index at or beyond the current length or dimension
    OutOfRange,
    /// Binary operation on operands of different length or dimension
    SizeMismatch,
    /// Token stream ended before the container was filled
    UnexpectedEndOfInput,
    /// Token could not be parsed as the element type
    InvalidToken,
    /// Raw byte buffer has the wrong size or alignment for the element type
    InvalidBuffer,
}

/// Coarse grouping of [`DynmatError`] kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Container could not be constructed
    Construction,
    /// Element or row access failed
    Access,
    /// Operand shapes disagree
    Shape,
    /// Textual or raw input was malformed
    Input,
}

impl DynmatError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            DynmatError::InvalidSize | DynmatError::SizeExceeded => ErrorCategory::Construction,
            DynmatError::OutOfRange => ErrorCategory::Access,
            DynmatError::SizeMismatch => ErrorCategory::Shape,
            DynmatError::UnexpectedEndOfInput
            | DynmatError::InvalidToken
            | DynmatError::InvalidBuffer => ErrorCategory::Input,
        }
    }
}

impl core::fmt::Display for DynmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            DynmatError::InvalidSize => "Size should be greater than zero",
            DynmatError::SizeExceeded => "Size exceeds the maximum allowed",
            DynmatError::OutOfRange => "Index out of range",
            DynmatError::SizeMismatch => "Operand sizes do not match",
            DynmatError::UnexpectedEndOfInput => "Unexpected end of input",
            DynmatError::InvalidToken => "Invalid token for element type",
            DynmatError::InvalidBuffer => "Invalid raw buffer for element type",
        };
        write!(f, "{msg}")
    }
}

/// Result type for dynmat operations
pub type Result<T> = core::result::Result<T, DynmatError>;
