//! The table of every two digit number, from `SMALL_ZERO_ZERO` to `SMALL_NINE_NINE`.
//!
//! The sprites are always written with the tens digit in the outer loop and the ones digit in the inner loop,
//! so sprite `n` is the number `n`.

use std::{convert::TryInto, io::Write};

use crate::{
    error::TableError,
    sprite::{Glyph, Sprite, SpriteName, DIGIT_COUNT, GLYPH_HEIGHT, MAX_GLYPH_ROW},
};

/// A glyph table and a name table which have been checked for consistency
#[derive(Debug)]
pub struct SpriteTable<'a> {
    glyphs: [Glyph; DIGIT_COUNT],
    names: [&'a str; DIGIT_COUNT],
}

fn check_glyph(digit: usize, rows: &[u8]) -> Result<Glyph, TableError> {
    let glyph: Glyph = rows.try_into().map_err(|_| TableError::WrongRowCount {
        digit,
        found: rows.len(),
    })?;

    if let Some((row, &value)) = glyph
        .iter()
        .enumerate()
        .find(|&(_, &value)| value > MAX_GLYPH_ROW)
    {
        return Err(TableError::RowOutOfRange { digit, row, value });
    }

    Ok(glyph)
}

fn check_name(digit: usize, name: &str) -> Result<(), TableError> {
    if name.is_empty() || !name.bytes().all(|c| c.is_ascii_uppercase()) {
        return Err(TableError::InvalidName {
            digit,
            name: name.into(),
        });
    }

    Ok(())
}

impl<'a> SpriteTable<'a> {
    /// Check the raw tables, failing on the first inconsistency found
    pub fn new(glyphs: &[&[u8]], names: &[&'a str]) -> Result<Self, TableError> {
        if glyphs.len() != DIGIT_COUNT {
            return Err(TableError::WrongGlyphCount {
                found: glyphs.len(),
            });
        }

        if names.len() != DIGIT_COUNT {
            return Err(TableError::WrongNameCount { found: names.len() });
        }

        let mut checked_glyphs = [[0; GLYPH_HEIGHT]; DIGIT_COUNT];
        for (digit, (checked, rows)) in checked_glyphs.iter_mut().zip(glyphs).enumerate() {
            *checked = check_glyph(digit, rows)?;
        }

        let mut checked_names = [""; DIGIT_COUNT];
        for (digit, &name) in names.iter().enumerate() {
            check_name(digit, name)?;

            if let Some(first) = checked_names[..digit].iter().position(|&other| other == name) {
                return Err(TableError::DuplicateName {
                    digit,
                    first,
                    name: name.into(),
                });
            }

            checked_names[digit] = name;
        }

        Ok(Self {
            glyphs: checked_glyphs,
            names: checked_names,
        })
    }

    /// The sprite for the number `10 * tens + ones`.
    ///
    /// # Panics
    ///
    /// Panics if either digit is not less than 10
    pub fn sprite(&self, tens: usize, ones: usize) -> Sprite<'a> {
        Sprite::new(
            SpriteName {
                tens: self.names[tens],
                ones: self.names[ones],
            },
            &self.glyphs[tens],
            &self.glyphs[ones],
        )
    }

    /// All sprites, from 00 to 99
    pub fn sprites(&self) -> impl Iterator<Item = Sprite<'a>> + '_ {
        (0..DIGIT_COUNT)
            .flat_map(move |tens| (0..DIGIT_COUNT).map(move |ones| self.sprite(tens, ones)))
    }

    pub fn sprite_count(&self) -> usize {
        DIGIT_COUNT * DIGIT_COUNT
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for sprite in self.sprites() {
            log::trace!("Writing {}", sprite.name);
            write!(writer, "{}", sprite)?;
        }

        writer.flush()
    }
}
