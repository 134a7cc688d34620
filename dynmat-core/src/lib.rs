#![no_std]

//! dynmat-core - Generic value-semantic sequence and square grid containers
//!
//! This crate provides the containers, their error type, size ceilings and
//! element traits. It performs no I/O; stream readers and writers live in
//! the `dynmat` crate.

extern crate alloc;

pub mod error;
pub mod grid;
pub mod limits;
pub mod row;
pub mod sequence;
pub mod traits;
pub mod validation;

pub use error::*;
pub use grid::Grid;
pub use limits::*;
pub use row::Row;
pub use sequence::Sequence;
pub use traits::*;
