//! The built-in 4x4 digit font.
//!
//! Each glyph is four rows, top row first. The low four bits of each row are the pixels,
//! the most significant of them being the leftmost pixel.

pub const DIGIT_GLYPHS: &[&[u8]] = &[
    &[
        0b1110, // zero
        0b1010, //
        0b1010, //
        0b1110,
    ],
    &[
        0b0100, // one
        0b1100, //
        0b0100, //
        0b1110,
    ],
    &[
        0b1100, // two
        0b0100, //
        0b1000, //
        0b1110,
    ],
    &[
        0b1110, // three
        0b0010, //
        0b1110, //
        0b1110,
    ],
    &[
        0b1010, // four
        0b1110, //
        0b0010, //
        0b0010,
    ],
    &[
        0b1110, // five
        0b1000, //
        0b0110, //
        0b1110,
    ],
    &[
        0b1110, // six
        0b1000, //
        0b1110, //
        0b1110,
    ],
    &[
        0b1110, // seven
        0b0100, //
        0b1000, //
        0b1000,
    ],
    &[
        0b1110, // eight
        0b1110, //
        0b1010, //
        0b1110,
    ],
    &[
        0b1110, // nine
        0b1110, //
        0b0010, //
        0b1110,
    ],
];

/// Used to name the sprites, indexed by digit
pub const DIGIT_NAMES: &[&str] = &[
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];
