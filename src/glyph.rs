use crate::error::{ArtError, Result};

pub const GLYPH_ROWS: usize = 7;
pub const GLYPH_WIDTH: usize = 5;

/// One character as seven 5-bit rows, most significant bit leftmost.
/// Row 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph([u8; GLYPH_ROWS]);

impl Glyph {
    pub fn is_set(&self, row: usize, column: usize) -> bool {
        debug_assert!(column < GLYPH_WIDTH);
        self.0[row] >> (GLYPH_WIDTH - 1 - column) & 1 == 1
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        (0..GLYPH_WIDTH).map(move |column| self.is_set(row, column))
    }
}

const A: Glyph = Glyph([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]);
const E: Glyph = Glyph([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]);
const H: Glyph = Glyph([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]);
const I: Glyph = Glyph([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]);
const J: Glyph = Glyph([0b00001, 0b00001, 0b00001, 0b00001, 0b10001, 0b10010, 0b01100]);
const M: Glyph = Glyph([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]);
const T: Glyph = Glyph([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]);

pub const SUPPORTED: &str = "AEHIJMT";

/// Look up the glyph for `ch`, ignoring ASCII case.
pub fn glyph(ch: char) -> Result<&'static Glyph> {
    match ch.to_ascii_uppercase() {
        'A' => Ok(&A),
        'E' => Ok(&E),
        'H' => Ok(&H),
        'I' => Ok(&I),
        'J' => Ok(&J),
        'M' => Ok(&M),
        'T' => Ok(&T),
        _ => Err(ArtError::UnsupportedGlyph(ch)),
    }
}

/// Fails on the first character without a glyph.
pub fn validate(message: &str) -> Result<()> {
    if message.is_empty() {
        return Err(ArtError::EmptyMessage);
    }
    message.chars().try_for_each(|ch| glyph(ch).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_letter_resolves() {
        for ch in SUPPORTED.chars() {
            assert!(glyph(ch).is_ok(), "missing glyph for {ch}");
            assert!(glyph(ch.to_ascii_lowercase()).is_ok());
        }
    }

    #[test]
    fn unsupported_letter_is_a_lookup_failure() {
        assert!(matches!(glyph('Z'), Err(ArtError::UnsupportedGlyph('Z'))));
        assert!(matches!(validate("MAZE"), Err(ArtError::UnsupportedGlyph('Z'))));
        assert!(matches!(validate(""), Err(ArtError::EmptyMessage)));
    }

    #[test]
    fn t_has_a_full_top_bar_and_a_centre_stem() {
        let t = glyph('T').unwrap();
        assert!(t.row(0).all(|on| on));
        for row in 1..GLYPH_ROWS {
            let cells: Vec<bool> = t.row(row).collect();
            assert_eq!(cells, vec![false, false, true, false, false]);
        }
    }
}
