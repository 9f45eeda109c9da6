use std::fmt;

/// The number of digits, and so the number of glyphs and digit names
pub const DIGIT_COUNT: usize = 10;

/// The number of pixel rows in each glyph, and so in each sprite
pub const GLYPH_HEIGHT: usize = 4;

/// The largest value a glyph row can take, as each row is four pixels wide
pub const MAX_GLYPH_ROW: u8 = 0b1111;

/// The pixel rows of a digit, top row first
pub type Glyph = [u8; GLYPH_HEIGHT];

/// Combine a row of the tens digit and a row of the ones digit into a single row of eight pixels.
///
/// The tens digit is drawn on the left, so it goes in the high bits.
pub const fn pack_nibbles(tens: u8, ones: u8) -> u8 {
    (tens << 4) | ones
}

/// Displays a byte as a binary literal, such as `0b00101110`, always with all eight digits
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinaryLiteral(pub u8);

impl fmt::Display for BinaryLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

/// Displays as `SMALL_<TENS>_<ONES>`, e.g. `SMALL_FOUR_TWO`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteName<'a> {
    pub tens: &'a str,
    pub ones: &'a str,
}

impl<'a> fmt::Display for SpriteName<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SMALL_{}_{}", self.tens, self.ones)
    }
}

/// A two digit number, drawn eight pixels wide and four pixels tall
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite<'a> {
    pub name: SpriteName<'a>,
    pub rows: [u8; GLYPH_HEIGHT],
}

impl<'a> Sprite<'a> {
    pub fn new(name: SpriteName<'a>, tens: &Glyph, ones: &Glyph) -> Self {
        let mut rows = [0; GLYPH_HEIGHT];

        for ((row, &tens_row), &ones_row) in rows.iter_mut().zip(tens).zip(ones) {
            *row = pack_nibbles(tens_row, ones_row);
        }

        Self { name, rows }
    }
}

/// Writes the sprite block, i.e. the header line, one line per row, and the terminator
impl<'a> fmt::Display for Sprite<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sprite {}", self.name)?;

        for &row in &self.rows {
            writeln!(f, "\t{}", BinaryLiteral(row))?;
        }

        writeln!(f, "endsprite")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: Glyph = [0b1110, 0b1010, 0b1010, 0b1110];
    const ONE: Glyph = [0b0100, 0b1100, 0b0100, 0b1110];

    #[test]
    fn tens_go_in_the_high_nibble() {
        assert_eq!(pack_nibbles(0b1110, 0b0100), 0b1110_0100);
        assert_eq!(pack_nibbles(0b0001, 0b0000), 0b0001_0000);
        assert_eq!(pack_nibbles(0b0000, 0b0001), 0b0000_0001);
        assert_eq!(pack_nibbles(MAX_GLYPH_ROW, MAX_GLYPH_ROW), u8::MAX);
    }

    #[test]
    fn packing_loses_no_bits() {
        for tens in 0..=MAX_GLYPH_ROW {
            for ones in 0..=MAX_GLYPH_ROW {
                let byte = pack_nibbles(tens, ones);
                assert_eq!(byte >> 4, tens);
                assert_eq!(byte & MAX_GLYPH_ROW, ones);
            }
        }
    }

    #[test]
    fn binary_literal_example() {
        assert_eq!(BinaryLiteral(224).to_string(), "0b11100000");
    }

    #[test]
    fn binary_literal_keeps_leading_zeros() {
        assert_eq!(BinaryLiteral(0).to_string(), "0b00000000");
        assert_eq!(BinaryLiteral(5).to_string(), "0b00000101");
        assert_eq!(BinaryLiteral(u8::MAX).to_string(), "0b11111111");
    }

    #[test]
    fn binary_literal_is_always_ten_characters() {
        for value in 0..=u8::MAX {
            let literal = BinaryLiteral(value).to_string();
            assert_eq!(literal.len(), 10, "{:?}", literal);
            assert!(literal.starts_with("0b"));
            assert_eq!(u8::from_str_radix(&literal[2..], 2), Ok(value));
        }
    }

    #[test]
    fn sprite_name_format() {
        let name = SpriteName {
            tens: "FOUR",
            ones: "TWO",
        };
        assert_eq!(name.to_string(), "SMALL_FOUR_TWO");
    }

    #[test]
    fn zero_one_block() {
        let sprite = Sprite::new(
            SpriteName {
                tens: "ZERO",
                ones: "ONE",
            },
            &ZERO,
            &ONE,
        );

        assert_eq!(sprite.rows, [0b1110_0100, 0b1010_1100, 0b1010_0100, 0b1110_1110]);
        assert_eq!(
            sprite.to_string(),
            "sprite SMALL_ZERO_ONE\n\t0b11100100\n\t0b10101100\n\t0b10100100\n\t0b11101110\nendsprite\n"
        );
    }
}
