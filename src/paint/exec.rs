use super::driver::{paint_history, PaintJob};
use super::output::{output_done, output_history, output_outcome, output_plan};
use super::plan::Plan;
use crate::cli::{CommonArgs, PaintArgs};
use crate::git::{GitCli, GitRepo};
use crate::publish::{publish, PublishTarget};
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

pub fn exec(common: CommonArgs, args: PaintArgs) -> anyhow::Result<()> {
    let started = Instant::now();

    // Validate the message before any git command runs.
    let plan = Plan::for_today(&common.message, common.today)
        .context("Failed to compose the contribution grid")?;
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    output_plan(&plan, repo.path(), &args.branch);

    let mut git = GitCli::new(repo.path()).echo(common.verbose);
    let job = PaintJob {
        message: &plan.message,
        branch: &args.branch,
        mode: args.mode,
        workdir: repo.path(),
        file: &args.file,
        window: plan.window,
        grid: &plan.grid,
    };

    let pb = progress_bar(plan.window.len() as u64, common.verbose);
    let report = paint_history(&mut git, &job, &pb)
        .with_context(|| format!("Failed to paint branch '{}'", args.branch))?;
    pb.finish_with_message(format!("{} commits created", report.commits_created));

    // Reopen so refs written by the git binary are picked up.
    let history = GitRepo::open(Some(repo.path()))
        .and_then(|r| r.branch_history(&args.branch))
        .context("Failed to read back painted history")?;
    output_history(&history, &report, args.mode);

    let target = PublishTarget::resolve(&args.host, args.repository.as_deref(), args.token.as_deref());
    let outcome = publish(&mut git, target, &args.branch)
        .with_context(|| format!("Failed to publish branch '{}'", args.branch))?;
    output_outcome(&outcome);

    output_done(started.elapsed());
    Ok(())
}

fn progress_bar(days: u64, verbose: bool) -> ProgressBar {
    if verbose {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(days);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} days {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("Painting...");
    pb
}
