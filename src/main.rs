use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use eol_audit::audit::Auditor;
use eol_audit::output;

#[derive(Parser)]
#[command(name = "eol-audit")]
#[command(version, about = "Audit a container image against endoflife.date support windows")]
struct Cli {
    /// Image reference, e.g. nginx:1.20, ubuntu:20.04, node:16-alpine
    image: String,

    /// Print the report as JSON instead of a terminal report
    #[arg(long)]
    json: bool,

    /// Audit as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let report = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(Auditor::new().audit(&cli.image, today))?;

    if cli.json {
        output::print_json(&report)?;
    } else {
        output::print_report(&report);
    }

    Ok(())
}
