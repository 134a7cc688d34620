//! Validation utilities for dynmat containers
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_length, validate_same_length};
pub use parsing::parse_token;
