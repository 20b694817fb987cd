//! Report rendering for the terminal

use colored::Colorize;

use crate::lifecycle::types::{EolReport, Status};

/// Prints the report as pretty JSON
pub fn print_json(report: &EolReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Prints a human-readable colored report
pub fn print_report(report: &EolReport) {
    let status = match report.status {
        Status::Critical => report.status.as_str().red().bold(),
        Status::Warning => report.status.as_str().yellow().bold(),
        Status::Info => report.status.as_str().blue().bold(),
        Status::Ok => report.status.as_str().green().bold(),
        Status::Unknown => report.status.as_str().dimmed().bold(),
    };

    println!("\n{} {}", status, format_subject(report));

    if !report.description.is_empty() {
        println!("  {}", report.description);
    }
    if !report.recommendation.is_empty() {
        println!("  {} {}", "→".bold(), report.recommendation.green());
    }

    let mut details = Vec::new();
    if !report.eol_date.is_empty() {
        details.push(format!("EOL: {}", report.eol_date));
    }
    if !report.support_end_date.is_empty() {
        details.push(format!("Support ends: {}", report.support_end_date));
    }
    if report.days_remaining >= 0 {
        details.push(format!("Days to EOL: {}", report.days_remaining));
    }
    if !report.latest.is_empty() {
        details.push(format!("Latest: {}", report.latest));
    }
    if !details.is_empty() {
        println!("  {}", details.join("  |  ").dimmed());
    }
    if !report.link.is_empty() {
        println!("  {}", report.link.underline().dimmed());
    }
    println!();
}

fn format_subject(report: &EolReport) -> String {
    if report.version.is_empty() {
        report.product.clone()
    } else {
        format!("{} {}", report.product, report.version)
    }
}
