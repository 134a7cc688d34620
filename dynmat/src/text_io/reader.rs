//! Token stream reader over `BufRead`

use crate::error::Result;
use dynmat_core::{Grid, ReadTokens, Sequence};
use std::collections::VecDeque;
use std::io::BufRead;

/// Reads containers from a whitespace-separated token stream
///
/// Lines are pulled from the underlying reader only until the target
/// has enough tokens. Tokens left over on a line stay queued for the
/// next read.
#[derive(Debug)]
pub struct TextReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TextReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Overwrite `target` with the next `target.token_count()` tokens
    ///
    /// A stream that ends early yields `UnexpectedEndOfInput`; the target
    /// may then be partially filled.
    pub fn read_into<V: ReadTokens>(&mut self, target: &mut V) -> Result<()> {
        let needed = target.token_count();
        self.fill(needed)?;

        let available = needed.min(self.pending.len());
        let tokens: Vec<String> = self.pending.drain(..available).collect();
        log::trace!("read {available} of {needed} tokens");

        target.read_tokens(&mut tokens.iter().map(String::as_str))?;
        Ok(())
    }

    /// Construct a sequence of `length` elements and read it
    pub fn read_sequence<T>(&mut self, length: usize) -> Result<Sequence<T>>
    where
        T: Default + ReadTokens,
    {
        let mut sequence = Sequence::new(length)?;
        self.read_into(&mut sequence)?;
        log::debug!("read sequence of length {length}");
        Ok(sequence)
    }

    /// Construct a `dimension` x `dimension` grid and read it row-major
    pub fn read_grid<T>(&mut self, dimension: usize) -> Result<Grid<T>>
    where
        T: Default + ReadTokens,
    {
        let mut grid = Grid::new(dimension)?;
        self.read_into(&mut grid)?;
        log::debug!("read grid of dimension {dimension}");
        Ok(grid)
    }

    /// Tokens read from the stream but not consumed yet
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self, needed: usize) -> Result<()> {
        let mut line = String::new();
        while self.pending.len() < needed {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(())
    }
}
