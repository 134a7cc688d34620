//! Whitespace-separated text streams for sequences and grids
//!
//! Reading consumes exactly as many tokens as the target needs, across
//! line boundaries, so several containers can be read from one stream in
//! turn. Writing emits one line per sequence and one line per grid row.

mod reader;
mod writer;

pub use reader::TextReader;
pub use writer::TextWriter;

use crate::config::TextConfig;
use crate::error::Result;
use dynmat_core::{Grid, ReadTokens, Sequence};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Read a sequence of `length` elements from a buffered reader
pub fn read_sequence<T, R>(reader: R, length: usize) -> Result<Sequence<T>>
where
    T: Default + ReadTokens,
    R: BufRead,
{
    TextReader::new(reader).read_sequence(length)
}

/// Read a `dimension` x `dimension` grid from a buffered reader
pub fn read_grid<T, R>(reader: R, dimension: usize) -> Result<Grid<T>>
where
    T: Default + ReadTokens,
    R: BufRead,
{
    TextReader::new(reader).read_grid(dimension)
}

/// Write a sequence with the default text configuration
pub fn write_sequence<T: Display, W: Write>(writer: W, sequence: &Sequence<T>) -> Result<()> {
    let mut writer = TextWriter::new(writer, TextConfig::default());
    writer.write_sequence(sequence)?;
    writer.flush()
}

/// Write a grid with the default text configuration
pub fn write_grid<T: Display, W: Write>(writer: W, grid: &Grid<T>) -> Result<()> {
    let mut writer = TextWriter::new(writer, TextConfig::default());
    writer.write_grid(grid)?;
    writer.flush()
}
