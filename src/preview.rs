use crate::cli::CommonArgs;
use crate::model::{PlannedCommit, PreviewOutput, SCHEMA_VERSION};
use crate::paint::Plan;
use crate::pattern::Pattern;
use anyhow::{Context, Result};
use chrono::{Datelike, Duration, Utc};
use console::style;

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> Result<()> {
    let plan = Plan::for_today(&common.message, common.today)
        .context("Failed to compose the contribution grid")?;

    if json {
        output_json(&plan)?;
    } else if ndjson {
        output_ndjson(&plan)?;
    } else {
        output_grid(&plan);
    }

    Ok(())
}

/// One string per weekday, `#` for a commit day and `.` for a blank one.
pub fn render_rows(grid: &Pattern) -> Vec<String> {
    grid.rows()
        .iter()
        .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect())
        .collect()
}

fn output_json(plan: &Plan) -> Result<()> {
    let commits: Vec<PlannedCommit> = plan.commits().collect();
    let output = PreviewOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        message: plan.message.clone(),
        start: plan.window.start,
        end: plan.window.end,
        width: plan.grid.width(),
        commit_days: commits.len(),
        rows: render_rows(&plan.grid),
        commits,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(plan: &Plan) -> Result<()> {
    for commit in plan.commits() {
        println!("{}", serde_json::to_string(&commit)?);
    }
    Ok(())
}

fn output_grid(plan: &Plan) {
    println!(
        "{} {} from {} to {}",
        style("Preview").bold(),
        style(&plan.message).cyan(),
        plan.window.start,
        plan.window.end
    );
    println!("{}", "─".repeat(plan.grid.width() + 4));

    // Month initials above the first week that starts in that month.
    let mut header = String::from("    ");
    let mut last_month = None;
    for week in 0..plan.grid.width() {
        let sunday = plan.window.start + Duration::weeks(week as i64);
        if last_month != Some(sunday.month()) {
            last_month = Some(sunday.month());
            let initial = sunday.format("%b").to_string();
            header.push(initial.chars().next().unwrap_or(' '));
        } else {
            header.push(' ');
        }
    }
    println!("{}", style(header).dim());

    for (label, row) in DAY_LABELS.iter().zip(plan.grid.rows()) {
        let cells: String = row
            .iter()
            .map(|&on| if on { "█" } else { "·" })
            .collect();
        println!("{} {}", style(label).dim(), style(cells).green());
    }

    println!(
        "\n{} commit days across {} weeks",
        style(plan.grid.count_on()).cyan(),
        plan.window.weeks()
    );
}
