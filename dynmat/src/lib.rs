//! dynmat - Generic dynamic sequences and square grids with stream I/O
//!
//! This library provides value-semantic containers with bounds-checked
//! access and element-wise and matrix arithmetic, together with
//! whitespace-separated text streams and JSON persistence.
//!
//! ## Architecture
//!
//! - **dynmat-core**: Containers, errors, size ceilings and element traits (no I/O)
//! - **dynmat**: Stream readers and writers, text configuration, JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use dynmat::{Grid, Sequence, TextReader};
//! use std::io::Cursor;
//!
//! fn example() -> dynmat::Result<()> {
//!     let mut reader = TextReader::new(Cursor::new("1 2\n3 4\n5 6\n"));
//!     let m: Grid<i32> = reader.read_grid(2)?;
//!     let v: Sequence<i32> = reader.read_sequence(2)?;
//!
//!     let product = (&m * &v)?;
//!     assert_eq!(product.as_slice(), &[17, 39]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export the containers and their core abstractions
pub use dynmat_core::{
    // Containers
    Grid, Sequence,
    // Element traits
    Element, ReadTokens,
    // Error handling
    DynmatError, ErrorCategory,
    // Size ceilings
    MAX_GRID_DIMENSION, MAX_SEQUENCE_LENGTH,
};

pub mod config;
pub mod error;
#[cfg(feature = "serde")]
pub mod json;
pub mod text_io;

pub use config::TextConfig;
pub use error::{IoError, Result};
pub use text_io::{read_grid, read_sequence, write_grid, write_sequence, TextReader, TextWriter};
