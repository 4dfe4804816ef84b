use crate::error::{ArtError, Result};
use crate::glyph::{glyph, GLYPH_ROWS};
use crate::window::Cell;

/// Seven rows of on/off cells, one column per week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: [Vec<bool>; GLYPH_ROWS],
}

impl Pattern {
    fn empty() -> Self {
        Self {
            rows: Default::default(),
        }
    }

    pub fn height(&self) -> usize {
        GLYPH_ROWS
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// `None` when the cell lies outside the pattern.
    pub fn get(&self, cell: Cell) -> Option<bool> {
        self.rows.get(cell.row)?.get(cell.column).copied()
    }

    pub fn count_on(&self) -> usize {
        self.rows.iter().flatten().filter(|&&on| on).count()
    }

    fn push_gap(&mut self) {
        for row in &mut self.rows {
            row.push(false);
        }
    }

    fn extend(&mut self, other: &Pattern) {
        for (row, tail) in self.rows.iter_mut().zip(other.rows.iter()) {
            row.extend_from_slice(tail);
        }
    }

    fn truncate(&mut self, width: usize) {
        for row in &mut self.rows {
            row.truncate(width);
        }
    }
}

/// Lays the glyphs of `message` side by side with a blank column between
/// neighbours. Width is `5 * n + (n - 1)` for an `n`-character message.
pub fn build_pattern(message: &str) -> Result<Pattern> {
    if message.is_empty() {
        return Err(ArtError::EmptyMessage);
    }

    let mut pattern = Pattern::empty();
    for (i, ch) in message.chars().enumerate() {
        if i > 0 {
            pattern.push_gap();
        }
        let g = glyph(ch)?;
        for (r, row) in pattern.rows.iter_mut().enumerate() {
            row.extend(g.row(r));
        }
    }
    Ok(pattern)
}

/// Tiles `message` across exactly `target_width` columns.
///
/// Repetitions are separated by a blank column. The tail is cropped wherever
/// it falls, even mid-glyph.
pub fn build_grid(message: &str, target_width: usize) -> Result<Pattern> {
    let base_width = build_pattern(message)?.width();
    let repeats = target_width / base_width + 2;

    let mut grid = Pattern::empty();
    for i in 0..repeats {
        if i > 0 {
            grid.push_gap();
        }
        grid.extend(&build_pattern(message)?);
    }
    grid.truncate(target_width);
    Ok(grid)
}
