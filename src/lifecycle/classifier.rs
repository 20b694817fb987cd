//! Date-driven status cascade for a resolved lifecycle record

use chrono::NaiveDate;

use crate::config::{INFO_WINDOW_DAYS, WARNING_WINDOW_DAYS};
use crate::lifecycle::types::{DateOrFlag, EolReport, LifecycleRecord, Status, DATE_FORMAT};

/// Classifies a resolved record into a risk tier.
///
/// A strict if/else-if cascade in priority order: discontinued, support
/// ended, EOL reached, support within 30 days, EOL within 30 days, either
/// boundary within 90 days, otherwise OK. The first satisfied branch wins.
///
/// Pure function of its arguments; classification with a pinned `today` is
/// fully reproducible.
pub fn classify(
    record: &LifecycleRecord,
    product: &str,
    latest_overall: &str,
    today: NaiveDate,
) -> EolReport {
    let cycle = &record.cycle;

    let eol_date = record.eol.as_date();
    let support_date = record.support.as_date();

    let eol_str = eol_date.map(format_date).unwrap_or_default();
    let support_str = support_date.map(format_date).unwrap_or_default();

    // Whole days until each boundary; -1 when no EOL date is known.
    let days_to_eol = eol_date.map(|d| days_until(d, today));
    let days_to_support_end = support_date.map(|d| days_until(d, today));

    let discontinued = match record.discontinued {
        DateOrFlag::Flag(flag) => flag,
        DateOrFlag::Date(d) => d <= today,
        DateOrFlag::Absent => false,
    };

    let mut report = EolReport {
        product: product.to_string(),
        version: cycle.clone(),
        status: Status::Ok,
        description: String::new(),
        recommendation: String::new(),
        link: record.link.clone().unwrap_or_default(),
        eol_date: eol_str.clone(),
        support_end_date: support_str.clone(),
        days_remaining: days_to_eol.unwrap_or(-1),
        latest: latest_overall.to_string(),
    };

    let support_ended = support_date.is_some_and(|d| d <= today);
    let eol_reached = eol_date.is_some_and(|d| d <= today);
    let support_near = days_to_support_end.is_some_and(|d| d > 0 && d <= WARNING_WINDOW_DAYS);
    let eol_near = days_to_eol.is_some_and(|d| d > 0 && d <= WARNING_WINDOW_DAYS);
    let support_ahead = days_to_support_end.is_some_and(|d| d > 0 && d <= INFO_WINDOW_DAYS);
    let eol_ahead = days_to_eol.is_some_and(|d| d > 0 && d <= INFO_WINDOW_DAYS);

    if discontinued {
        report.status = Status::Critical;
        report.description = format!("{product} {cycle} is a discontinued version.");
        report.recommendation = format!(
            "Upgrade immediately to the latest version ({latest_overall}) as this version is no longer maintained."
        );
    } else if support_ended {
        report.status = Status::Critical;
        report.description =
            format!("{product} {cycle} is no longer supported (support ended on {support_str}).");
        report.recommendation =
            format!("Upgrade to a supported version. Latest version is {latest_overall}.");
    } else if eol_reached {
        report.status = Status::Critical;
        report.description = format!("{product} {cycle} reached End-of-Life on {eol_str}.");
        report.recommendation =
            format!("Upgrade to a newer version. Latest version is {latest_overall}.");
    } else if support_near {
        report.status = Status::Warning;
        report.description = format!(
            "{product} {cycle} will lose support in {} days (on {support_str}).",
            days_to_support_end.unwrap_or_default()
        );
        report.recommendation =
            format!("Plan to upgrade soon. Latest version is {latest_overall}.");
    } else if eol_near {
        report.status = Status::Warning;
        report.description = format!(
            "{product} {cycle} will reach End-of-Life in {} days (on {eol_str}).",
            days_to_eol.unwrap_or_default()
        );
        report.recommendation =
            format!("Plan to upgrade soon. Latest version is {latest_overall}.");
    } else if support_ahead || eol_ahead {
        report.status = Status::Info;
        // The support-based description takes priority when both qualify.
        report.description = if support_ahead {
            format!(
                "{product} {cycle} will lose support in {} days (on {support_str}).",
                days_to_support_end.unwrap_or_default()
            )
        } else {
            format!(
                "{product} {cycle} will reach End-of-Life in {} days (on {eol_str}).",
                days_to_eol.unwrap_or_default()
            )
        };
        report.recommendation =
            format!("Consider planning an upgrade. Latest version is {latest_overall}.");
    } else {
        report.status = Status::Ok;
        report.description = format!("{product} {cycle} is a currently supported version.");
        if record.latest != record.cycle {
            report.recommendation = format!(
                "This version is supported, but consider upgrading to the latest release in this cycle ({}) for the newest fixes.",
                record.latest
            );
        }
    }

    report
}

/// Picks the `latest` label of the record with the most recent release date.
///
/// Release dates are compared lexicographically, which is only valid for
/// zero-padded ISO dates; the provider delivers those. Ties keep the
/// earliest candidate in input order.
pub fn overall_latest(candidates: &[LifecycleRecord]) -> &str {
    let mut newest: Option<&LifecycleRecord> = None;
    for candidate in candidates {
        match newest {
            Some(current) if candidate.release_date <= current.release_date => {}
            _ => newest = Some(candidate),
        }
    }
    newest.map(|c| c.latest.as_str()).unwrap_or_default()
}

fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
