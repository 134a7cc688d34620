//! Token stream writer over `Write`

use crate::config::TextConfig;
use crate::error::Result;
use dynmat_core::{Grid, Sequence};
use std::fmt::Display;
use std::io::Write;

/// Writes containers as whitespace-separated text
#[derive(Debug)]
pub struct TextWriter<W> {
    writer: W,
    config: TextConfig,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W, config: TextConfig) -> Self {
        Self { writer, config }
    }

    /// Write the elements in index order followed by the row terminator
    pub fn write_sequence<T: Display>(&mut self, sequence: &Sequence<T>) -> Result<()> {
        for (idx, value) in sequence.iter().enumerate() {
            if idx > 0 {
                self.writer.write_all(self.config.separator.as_bytes())?;
            }
            match self.config.precision {
                Some(precision) => write!(self.writer, "{:.*}", precision, value)?,
                None => write!(self.writer, "{value}")?,
            }
        }
        self.writer.write_all(self.config.row_terminator.as_bytes())?;
        Ok(())
    }

    /// Write the grid row-major, one row per line
    pub fn write_grid<T: Display>(&mut self, grid: &Grid<T>) -> Result<()> {
        for row in grid.rows().iter() {
            self.write_sequence(row)?;
        }
        log::debug!("wrote grid of dimension {}", grid.size());
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
