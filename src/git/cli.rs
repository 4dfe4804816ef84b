use crate::error::{ArtError, Result};
use crate::util::{git_date, redact_url};
use chrono::NaiveDateTime;
use console::style;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// The handful of version-control operations the painter needs.
///
/// Every call either completes or returns an error; callers treat any error
/// as fatal for the run.
pub trait VersionControl {
    fn checkout_orphan(&mut self, branch: &str) -> Result<()>;
    fn checkout(&mut self, branch: &str) -> Result<()>;
    /// Untrack and delete every tracked file in the work tree.
    fn remove_all(&mut self) -> Result<()>;
    fn stage(&mut self, path: &Path) -> Result<()>;
    /// Commit the index with author and committer dates both set to `at`.
    fn commit(&mut self, message: &str, at: NaiveDateTime) -> Result<()>;
    /// Overwrite `branch` at `destination`, a remote name or URL. Nothing
    /// about the destination is written to the repository configuration.
    fn push_force(&mut self, destination: &str, branch: &str) -> Result<()>;
}

/// [`VersionControl`] backed by the `git` binary, run inside `workdir`.
pub struct GitCli {
    workdir: PathBuf,
    echo: bool,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
            echo: false,
        }
    }

    /// Print every invocation before running it.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn command<I, S>(&self, args: I) -> (Command, String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.workdir);
        let mut shown = String::from("git");
        for arg in args {
            let arg = arg.as_ref();
            shown.push(' ');
            shown.push_str(&redact_url(&arg.to_string_lossy()));
            cmd.arg(arg);
        }
        (cmd, shown)
    }

    fn output(&self, mut cmd: Command, shown: &str) -> Result<Output> {
        if self.echo {
            println!("{} {}", style("$").dim(), style(shown).dim());
        }
        Ok(cmd.output()?)
    }

    fn run(&self, cmd: Command, shown: String) -> Result<()> {
        let output = self.output(cmd, &shown)?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = redact_url(stderr.trim());
        Err(ArtError::Command {
            command: shown,
            status: output.status.to_string(),
            stderr: if stderr.is_empty() { "no output".to_string() } else { stderr },
        })
    }

    fn git<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (cmd, shown) = self.command(args);
        self.run(cmd, shown)
    }
}

impl VersionControl for GitCli {
    fn checkout_orphan(&mut self, branch: &str) -> Result<()> {
        self.git(["checkout", "--quiet", "--orphan", branch])
    }

    fn checkout(&mut self, branch: &str) -> Result<()> {
        self.git(["checkout", "--quiet", branch])
    }

    fn remove_all(&mut self) -> Result<()> {
        self.git(["rm", "-r", "-f", "--quiet", "--ignore-unmatch", "."])
    }

    fn stage(&mut self, path: &Path) -> Result<()> {
        let (cmd, shown) = self.command([OsStr::new("add"), OsStr::new("--"), path.as_os_str()]);
        self.run(cmd, shown)
    }

    fn commit(&mut self, message: &str, at: NaiveDateTime) -> Result<()> {
        let stamp = git_date(&at);
        let (mut cmd, shown) = self.command(["commit", "--quiet", "-m", message]);
        // Scoped to this child only; the parent environment is never touched.
        cmd.env("GIT_AUTHOR_DATE", &stamp)
            .env("GIT_COMMITTER_DATE", &stamp);
        self.run(cmd, format!("{shown} @ {stamp}"))
    }

    fn push_force(&mut self, destination: &str, branch: &str) -> Result<()> {
        let (mut cmd, shown) = self.command(["push", "--force", destination, branch]);
        // Batch run: fail instead of asking for credentials.
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        self.run(cmd, shown)
    }
}
