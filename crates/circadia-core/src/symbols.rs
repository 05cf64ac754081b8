//! Braille fill-level masks for paired-column bar rendering.
//!
//! Dots in a braille cell are numbered:
//!
//! ```text
//! 1 •• 4
//! 2 •• 5
//! 3 •• 6
//! 7 •• 8
//! ```
//!
//! Bit `n` of a mask lights dot `n + 1`. Each glyph column carries two bars:
//! the left sub-column (dots 1,2,3,7) and the right sub-column (dots
//! 4,5,6,8), both filling from the bottom dot upward. Exactly five fill
//! levels exist per sub-column; the tables below are indexed by level.

/// Base codepoint of the Unicode braille block.
pub const GLYPH_BASE: u32 = 0x2800;

/// Left sub-column masks by fill level, bottom-up.
pub const LEFT_FILL: [u8; 5] = [
    0b0000_0000, // 0: empty
    0b0100_0000, // 1: dot 7
    0b0100_0100, // 2: dots 3,7
    0b0100_0110, // 3: dots 2,3,7
    0b0100_0111, // 4: dots 1,2,3,7
];

/// Right sub-column masks by fill level, bottom-up.
pub const RIGHT_FILL: [u8; 5] = [
    0b0000_0000, // 0: empty
    0b1000_0000, // 1: dot 8
    0b1010_0000, // 2: dots 6,8
    0b1011_0000, // 3: dots 5,6,8
    0b1011_1000, // 4: dots 4,5,6,8
];

/// Map a combined dot mask to its display glyph.
#[inline]
#[must_use]
pub fn glyph(mask: u8) -> char {
    // U+2800..=U+28FF is a dense block; every mask is a valid codepoint.
    char::from_u32(GLYPH_BASE + u32::from(mask)).unwrap_or(' ')
}
