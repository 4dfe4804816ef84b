use super::plan::Plan;
use crate::model::{BranchHistory, InitMode, PaintReport};
use crate::publish::PublishOutcome;
use console::style;
use std::path::Path;
use std::time::Duration;

pub fn output_plan(plan: &Plan, workdir: &Path, branch: &str) {
    println!(
        "{} {} from {} to {} ({} days)",
        style("Painting").bold(),
        style(&plan.message).cyan(),
        plan.window.start,
        plan.window.end,
        plan.window.len()
    );
    println!(
        "Grid {}x{}, {} commit days, branch {} in {}",
        plan.grid.height(),
        plan.grid.width(),
        plan.grid.count_on(),
        style(branch).yellow(),
        workdir.display()
    );
}

pub fn output_history(history: &BranchHistory, report: &PaintReport, mode: InitMode) {
    println!(
        "Created {} commits, skipped {} days",
        style(report.commits_created).green(),
        style(report.days_skipped).dim()
    );

    if let (Some(earliest), Some(latest)) = (history.earliest, history.latest) {
        println!(
            "Branch {} now holds {} commits from {} to {}",
            style(&history.branch).yellow(),
            history.commit_count,
            style(earliest).dim(),
            style(latest).dim()
        );
    }

    // bootstrap + one per painted day
    let expected = report.commits_created + 1;
    if mode == InitMode::Orphan && history.commit_count != expected {
        println!(
            "{} expected {} commits on {}, found {}",
            style("warning:").yellow().bold(),
            expected,
            history.branch,
            history.commit_count
        );
    }
    if !history.monotonic {
        println!(
            "{} commit dates on {} are not in ascending order",
            style("warning:").yellow().bold(),
            history.branch
        );
    }
}

pub fn output_outcome(outcome: &PublishOutcome) {
    match outcome {
        PublishOutcome::Pushed { repository, branch } => {
            println!("Force-pushed {} to {}", style(branch).yellow(), style(repository).cyan());
        }
        PublishOutcome::Skipped { reason } => {
            println!(
                "{} skipping publish: {}",
                style("note:").yellow().bold(),
                reason
            );
        }
    }
}

pub fn output_done(elapsed: Duration) {
    let elapsed = Duration::from_secs(elapsed.as_secs());
    println!(
        "{} in {}",
        style("Commit art generation complete").green().bold(),
        humantime::format_duration(elapsed)
    );
}
