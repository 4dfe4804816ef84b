use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// How the target branch is prepared before the history is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InitMode {
    /// Start a fresh history root with `git checkout --orphan`.
    #[default]
    Orphan,
    /// Check out a branch that already exists and build on top of it.
    Existing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintReport {
    pub commits_created: usize,
    pub days_skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHistory {
    pub branch: String,
    pub commit_count: usize,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
    /// Every commit on the first-parent chain is dated no earlier than its parent.
    pub monotonic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCommit {
    pub date: NaiveDate,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub message: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub width: usize,
    pub commit_days: usize,
    pub rows: Vec<String>,
    pub commits: Vec<PlannedCommit>,
}
