use crate::sprite::{DIGIT_COUNT, GLYPH_HEIGHT};

/// An inconsistency in the glyph or name table.
///
/// Any of these means the tables were edited incorrectly, so no sprites are generated.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("Glyph table has {found} glyphs, expected {}", DIGIT_COUNT)]
    WrongGlyphCount { found: usize },
    #[error("Name table has {found} names, expected {}", DIGIT_COUNT)]
    WrongNameCount { found: usize },
    #[error("Glyph for digit {digit} has {found} rows, expected {}", GLYPH_HEIGHT)]
    WrongRowCount { digit: usize, found: usize },
    #[error("Glyph for digit {digit} has value {value:#b} in row {row}, which is wider than 4 bits")]
    RowOutOfRange { digit: usize, row: usize, value: u8 },
    #[error("Name for digit {digit} is {name:?}, names must be made of uppercase letters A-Z")]
    InvalidName { digit: usize, name: String },
    #[error("Name for digit {digit} is {name:?}, which is already used by digit {first}")]
    DuplicateName {
        digit: usize,
        first: usize,
        name: String,
    },
}
