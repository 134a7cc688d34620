//! Read two square grids and a vector from stdin and print their combinations
//!
//! Input: the dimension `n`, then two `n` x `n` grids and a vector of
//! length `n`, all whitespace separated.
//!
//! ```text
//! echo "2  1 2 3 4  5 6 7 8  1 1" | cargo run --example grid_calculator
//! ```

use dynmat::{Grid, Sequence, TextConfig, TextReader, TextWriter};
use std::io::{self, BufReader};

fn main() -> dynmat::Result<()> {
    env_logger::init();

    let mut reader = TextReader::new(BufReader::new(io::stdin()));
    let dimension: Sequence<usize> = reader.read_sequence(1)?;
    let dimension = dimension[0];

    let a: Grid<f64> = reader.read_grid(dimension)?;
    let b: Grid<f64> = reader.read_grid(dimension)?;
    let v: Sequence<f64> = reader.read_sequence(dimension)?;

    let mut writer = TextWriter::new(io::stdout(), TextConfig::default().with_precision(2));

    println!("A + B:");
    writer.write_grid(&(&a + &b)?)?;
    writer.flush()?;

    println!("A - B:");
    writer.write_grid(&(&a - &b)?)?;
    writer.flush()?;

    println!("A * B:");
    writer.write_grid(&(&a * &b)?)?;
    writer.flush()?;

    println!("A * v:");
    writer.write_sequence(&(&a * &v)?)?;
    writer.flush()?;

    Ok(())
}
