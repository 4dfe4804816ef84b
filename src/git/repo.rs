use crate::error::{ArtError, Result};
use crate::model::BranchHistory;
use chrono::{DateTime, Local, NaiveDate};
use gix::{discover, ObjectId, Repository};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo
            .workdir()
            .ok_or_else(|| {
                ArtError::GitRepo(format!(
                    "{} is a bare repository; a work tree is required",
                    repo_path.display()
                ))
            })?
            .to_path_buf();

        Ok(Self { repo, path })
    }

    /// Work tree root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walks the first-parent chain of `branch` from its tip.
    pub fn branch_history(&self, branch: &str) -> Result<BranchHistory> {
        let spec = format!("refs/heads/{branch}");
        let tip: ObjectId = self
            .repo
            .rev_parse_single(spec.as_str())
            .map_err(|e| ArtError::GitRepo(format!("Cannot resolve branch '{branch}': {e}")))?
            .detach();

        let mut commit_count = 0usize;
        let mut earliest: Option<NaiveDate> = None;
        let mut latest: Option<NaiveDate> = None;
        let mut monotonic = true;
        let mut child_secs: Option<i64> = None;
        let mut next = Some(tip);

        while let Some(commit_id) = next {
            let commit = self.repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let day = local_day(secs)?;

            if let Some(child) = child_secs {
                if secs > child {
                    monotonic = false;
                }
            }
            child_secs = Some(secs);

            commit_count += 1;
            earliest = Some(earliest.map_or(day, |d| d.min(day)));
            latest = Some(latest.map_or(day, |d| d.max(day)));

            next = commit.parent_ids().next().map(|id| id.detach());
        }

        Ok(BranchHistory {
            branch: branch.to_string(),
            commit_count,
            earliest,
            latest,
            monotonic,
        })
    }
}

fn local_day(secs: i64) -> Result<NaiveDate> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .ok_or_else(|| ArtError::InvalidDate(format!("Invalid timestamp: {secs}")))
}
