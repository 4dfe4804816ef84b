use crate::error::Result;
use crate::glyph;
use crate::model::PlannedCommit;
use crate::pattern::{build_grid, Pattern};
use crate::window::{cell_for_index, DateWindow, GRID_WEEKS};
use chrono::{Local, NaiveDate};

/// Date window and grid for one run, computed before any repository work.
#[derive(Debug, Clone)]
pub struct Plan {
    pub message: String,
    pub window: DateWindow,
    pub grid: Pattern,
}

impl Plan {
    pub fn new(message: &str, today: NaiveDate) -> Result<Self> {
        glyph::validate(message)?;
        Ok(Self {
            message: message.to_string(),
            window: DateWindow::ending_on_or_before(today)?,
            grid: build_grid(message, GRID_WEEKS)?,
        })
    }

    /// Plan for the local calendar date unless `today` overrides it.
    pub fn for_today(message: &str, today: Option<NaiveDate>) -> Result<Self> {
        Self::new(message, today.unwrap_or_else(|| Local::now().date_naive()))
    }

    pub fn commits(&self) -> impl Iterator<Item = PlannedCommit> + '_ {
        self.window.days().filter_map(move |(index, date)| {
            let cell = cell_for_index(index);
            self.grid.get(cell).filter(|&on| on).map(|_| PlannedCommit {
                date,
                row: cell.row,
                column: cell.column,
            })
        })
    }
}
