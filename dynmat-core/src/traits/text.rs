//! Textual read contract for container elements
//!
//! Reading is defined recursively: a scalar consumes one token, a
//! sequence reads each of its elements in index order. A grid is a
//! sequence of row sequences, so row-major input follows for free.

use crate::validation::parse_token;
use crate::Result;

/// Trait for values that can be filled in place from a token stream
pub trait ReadTokens {
    /// Number of tokens [`read_tokens`](Self::read_tokens) consumes
    fn token_count(&self) -> usize {
        1
    }

    /// Consume the tokens this value needs and overwrite it with them
    ///
    /// On failure the value may be partially overwritten.
    fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<()>
    where
        I: Iterator<Item = &'a str>;
}

macro_rules! impl_read_tokens {
    ($($t:ty),+) => {
        $(
            impl ReadTokens for $t {
                fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<()>
                where
                    I: Iterator<Item = &'a str>,
                {
                    *self = parse_token(tokens.next())?;
                    Ok(())
                }
            }
        )+
    };
}

impl_read_tokens!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
