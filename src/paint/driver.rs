use crate::error::Result;
use crate::git::VersionControl;
use crate::model::{InitMode, PaintReport};
use crate::pattern::Pattern;
use crate::util::commit_time;
use crate::window::{cell_for_index, DateWindow};
use chrono::NaiveDate;
use indicatif::ProgressBar;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const BOOTSTRAP_MESSAGE: &str = "Initial commit for commit art";

/// Everything the driver needs to rebuild one branch.
pub struct PaintJob<'a> {
    pub message: &'a str,
    pub branch: &'a str,
    pub mode: InitMode,
    pub workdir: &'a Path,
    /// Tracked file, relative to `workdir`.
    pub file: &'a Path,
    pub window: DateWindow,
    pub grid: &'a Pattern,
}

impl PaintJob<'_> {
    fn file_on_disk(&self) -> PathBuf {
        self.workdir.join(self.file)
    }
}

pub fn day_line(date: NaiveDate) -> String {
    format!("Commit for {date}")
}

/// Rebuilds `job.branch` so that exactly the "on" cells of `job.grid` get a
/// commit, oldest day first, on top of a single bootstrap commit dated the
/// day before the window.
///
/// Stops at the first failing operation, leaving whatever was already
/// committed in place.
pub fn paint_history<V: VersionControl>(
    vcs: &mut V,
    job: &PaintJob<'_>,
    progress: &ProgressBar,
) -> Result<PaintReport> {
    match job.mode {
        InitMode::Orphan => vcs.checkout_orphan(job.branch)?,
        InitMode::Existing => vcs.checkout(job.branch)?,
    }
    vcs.remove_all()?;

    let path = job.file_on_disk();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, format!("{} Commit Art\n", job.message))?;
    vcs.stage(job.file)?;
    vcs.commit(BOOTSTRAP_MESSAGE, commit_time(job.window.eve()?)?)?;

    let mut report = PaintReport::default();
    for (index, date) in job.window.days() {
        let cell = cell_for_index(index);
        // Out-of-grid days stay blank.
        let on = job.grid.get(cell).unwrap_or(false);

        if on {
            let line = day_line(date);
            let mut file = OpenOptions::new().append(true).open(&path)?;
            writeln!(file, "{line}")?;
            drop(file);

            vcs.stage(job.file)?;
            vcs.commit(&line, commit_time(date)?)?;
            report.commits_created += 1;
            progress.set_message(format!("{date} painted"));
        } else {
            report.days_skipped += 1;
        }
        progress.inc(1);
    }

    Ok(report)
}
