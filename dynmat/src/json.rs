//! JSON persistence for sequences and grids
//!
//! Sequences are plain JSON arrays, grids are arrays of row arrays.
//! Decoding goes through the same length checks as construction, so an
//! empty, oversized or ragged document is rejected.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Encode a container as a JSON string
pub fn to_json<V: Serialize>(value: &V) -> Result<String> {
    let json = serde_json::to_string(value)?;
    log::debug!("encoded {} bytes of JSON", json.len());
    Ok(json)
}

/// Decode a container from a JSON string
pub fn from_json<V: DeserializeOwned>(json: &str) -> Result<V> {
    log::debug!("decoding {} bytes of JSON", json.len());
    Ok(serde_json::from_str(json)?)
}

/// Encode a container as JSON into a writer
pub fn write_json<V: Serialize, W: Write>(writer: W, value: &V) -> Result<()> {
    serde_json::to_writer(writer, value)?;
    Ok(())
}

/// Decode a container from a JSON reader
pub fn read_json<V: DeserializeOwned, R: Read>(reader: R) -> Result<V> {
    Ok(serde_json::from_reader(reader)?)
}
