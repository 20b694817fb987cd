use chrono::NaiveDate;

use eol_audit::audit::evaluate;
use eol_audit::lifecycle::types::{LifecycleRecord, Status};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn records(json: serde_json::Value) -> Vec<LifecycleRecord> {
    serde_json::from_value(json).unwrap()
}

#[test]
fn eol_node_cycle_is_critical_after_its_eol_date() {
    let records = records(serde_json::json!([
        {
            "cycle": "18",
            "releaseDate": "2022-04-19",
            "eol": "2025-04-30",
            "latest": "18.20.4",
            "lts": "2022-10-25",
            "support": false,
            "discontinued": false
        }
    ]));

    let report = evaluate("node", "18.19", &records, date("2025-06-15"));

    assert_eq!(report.status, Status::Critical);
    assert_eq!(report.version, "18");
    assert!(report.description.contains("2025-04-30"));
    assert_eq!(report.eol_date, "2025-04-30");
    assert_eq!(report.latest, "18.20.4");
}

#[test]
fn supported_cycle_is_ok_with_upgrade_hint() {
    let records = records(serde_json::json!([
        {
            "cycle": "1.27",
            "releaseDate": "2024-05-29",
            "eol": false,
            "latest": "1.27.4",
            "support": true,
            "discontinued": false
        },
        {
            "cycle": "1.26",
            "releaseDate": "2024-04-23",
            "eol": false,
            "latest": "1.26.3",
            "support": true,
            "discontinued": false
        }
    ]));

    let report = evaluate("nginx", "1.26.1", &records, date("2025-06-15"));

    assert_eq!(report.status, Status::Ok);
    assert_eq!(report.version, "1.26");
    // Overall latest comes from the newest release date across cycles.
    assert_eq!(report.latest, "1.27.4");
    assert!(report.recommendation.contains("1.26.3"));
}

#[test]
fn numeric_cycle_from_the_wire_still_matches() {
    let records = records(serde_json::json!([
        {
            "cycle": 8.1,
            "releaseDate": "2021-11-25",
            "eol": "2025-12-31",
            "latest": "8.1.30",
            "support": "2023-11-25",
            "discontinued": false
        }
    ]));

    let report = evaluate("php", "8.1.2", &records, date("2025-06-15"));

    // Support ended before the audit date, so the EOL date being in the
    // future does not soften the tier.
    assert_eq!(report.status, Status::Critical);
    assert!(report.description.contains("support ended on 2023-11-25"));
}

#[test]
fn unknown_version_yields_unknown_not_an_error() {
    let records = records(serde_json::json!([
        { "cycle": "22.04", "releaseDate": "2022-04-21", "latest": "22.04.4" }
    ]));

    let report = evaluate("ubuntu", "99.99", &records, date("2025-06-15"));

    assert_eq!(report.status, Status::Unknown);
    assert_eq!(
        report.description,
        "Version '99.99' not found for product 'ubuntu'"
    );
    assert_eq!(report.days_remaining, -1);
}

#[test]
fn empty_candidate_list_yields_unknown() {
    let report = evaluate("ubuntu", "22.04", &[], date("2025-06-15"));
    assert_eq!(report.status, Status::Unknown);
    assert!(report.latest.is_empty());
}

#[test]
fn evaluation_is_deterministic_for_a_pinned_date() {
    let records = records(serde_json::json!([
        {
            "cycle": "3.11",
            "releaseDate": "2022-10-24",
            "eol": "2027-10-24",
            "latest": "3.11.9",
            "support": "2025-07-01",
            "discontinued": false
        }
    ]));

    let today = date("2025-06-15");
    let first = evaluate("python", "3.11.4", &records, today);
    let second = evaluate("python", "3.11.4", &records, today);
    assert_eq!(first, second);
}
