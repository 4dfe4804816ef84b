use crate::error::{ArtError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 53;
pub const WINDOW_DAYS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// Inclusive range of calendar days painted onto the graph.
///
/// `start` is always a Sunday and `end` the Saturday 370 days later, so the
/// window covers exactly [`GRID_WEEKS`] whole weeks and day `i` lands on row
/// `i % 7` of column `i / 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Position of a single day on the contribution graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl DateWindow {
    /// Window ending on the most recent Saturday, `today` included.
    ///
    /// Fails only when the window or its eve would fall before the earliest
    /// representable date.
    pub fn ending_on_or_before(today: NaiveDate) -> Result<Self> {
        let weekday = today.weekday().num_days_from_monday() as i64;
        let saturday = Weekday::Sat.num_days_from_monday() as i64;
        let offset = (weekday - saturday).rem_euclid(DAYS_PER_WEEK as i64);

        let out_of_range =
            || ArtError::InvalidDate(format!("No {WINDOW_DAYS}-day window fits before {today}"));
        let end = today
            .checked_sub_signed(Duration::days(offset))
            .ok_or_else(out_of_range)?;
        let start = end
            .checked_sub_signed(Duration::days(WINDOW_DAYS as i64 - 1))
            .ok_or_else(out_of_range)?;
        start.pred_opt().ok_or_else(out_of_range)?;

        Ok(Self { start, end })
    }

    pub fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    pub fn weeks(&self) -> usize {
        self.len().div_ceil(DAYS_PER_WEEK)
    }

    /// Day before the window opens; the bootstrap commit is dated here.
    pub fn eve(&self) -> Result<NaiveDate> {
        self.start
            .pred_opt()
            .ok_or_else(|| ArtError::InvalidDate(format!("No day before {}", self.start)))
    }

    /// Every day of the window with its cursor index, in ascending order.
    pub fn days(&self) -> impl Iterator<Item = (usize, NaiveDate)> {
        self.start.iter_days().take(self.len()).enumerate()
    }
}

pub fn cell_for_index(index: usize) -> Cell {
    Cell {
        row: index % DAYS_PER_WEEK,
        column: index / DAYS_PER_WEEK,
    }
}
