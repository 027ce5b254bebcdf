//! Puzzle input parsing.

use std::io::Read;

use derive_more::{Display, Error, From};
use ninegrid_core::{DigitGrid, Position};

/// Error reading a puzzle from a text source.
#[derive(Debug, Display, Error, From)]
pub enum InputError {
    /// The source could not be read at all.
    #[display("cannot read puzzle: {_0}")]
    Io(std::io::Error),
    /// A token was not an integer.
    #[display("invalid token {_0:?}, expected an integer")]
    #[from(ignore)]
    Token(#[error(not(source))] String),
    /// An integer outside the cell value range.
    #[display("value {_0} out of range, expected 0-9")]
    #[from(ignore)]
    OutOfRange(#[error(not(source))] u64),
    /// The source did not hold exactly 81 values.
    #[display("expected 81 values, found {_0}")]
    #[from(ignore)]
    Count(#[error(not(source))] usize),
}

/// Reads a puzzle: 81 whitespace-separated integers in `0..=9`, where 0
/// marks an empty cell. Values fill the grid in the order it renders,
/// left to right and top to bottom.
pub fn read_grid(mut reader: impl Read) -> Result<DigitGrid, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut values = Vec::with_capacity(81);
    for token in text.split_whitespace() {
        let value: u64 = token
            .parse()
            .map_err(|_| InputError::Token(token.to_owned()))?;
        if value > 9 {
            return Err(InputError::OutOfRange(value));
        }
        values.push(value as u8);
    }
    if values.len() != 81 {
        return Err(InputError::Count(values.len()));
    }

    let mut grid = DigitGrid::new();
    for (i, &value) in values.iter().enumerate() {
        grid.set(Position::new(i / 9, i % 9), value);
    }
    Ok(grid)
}
