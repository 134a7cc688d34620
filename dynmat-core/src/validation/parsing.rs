//! Token parsing for textual container input

use crate::DynmatError;
use core::str::FromStr;

/// Parse the next token of a whitespace-separated stream
///
/// A missing token maps to `UnexpectedEndOfInput`, a token the element
/// type rejects maps to `InvalidToken`.
pub fn parse_token<T: FromStr>(token: Option<&str>) -> Result<T, DynmatError> {
    let token = token.ok_or(DynmatError::UnexpectedEndOfInput)?;
    token.parse().map_err(|_| DynmatError::InvalidToken)
}
