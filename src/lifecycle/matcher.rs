//! Tiered resolution of a requested version to a lifecycle record
//!
//! Providers key cycles inconsistently (sometimes "1.20", sometimes
//! "1.20.4"), so resolution cascades through four tiers of decreasing
//! precision. Each tier scans all candidates in input order before the next
//! tier is tried; the first hit within a tier wins.

use crate::lifecycle::types::LifecycleRecord;

/// Resolves `requested` to the single best-matching record, or `None` when
/// no tier matches. An empty request or candidate list always yields `None`.
pub fn resolve<'a>(
    requested: &str,
    candidates: &'a [LifecycleRecord],
) -> Option<&'a LifecycleRecord> {
    if requested.is_empty() || candidates.is_empty() {
        return None;
    }

    exact_match(requested, candidates)
        .or_else(|| prefix_match(requested, candidates))
        .or_else(|| semantic_match(requested, candidates))
        .or_else(|| major_match(requested, candidates))
}

/// Tier 1: the cycle id equals the requested version.
fn exact_match<'a>(
    requested: &str,
    candidates: &'a [LifecycleRecord],
) -> Option<&'a LifecycleRecord> {
    candidates.iter().find(|c| c.cycle == requested)
}

/// Tier 2: the requested version starts with the cycle id, covering cycles
/// keyed by major.minor when the request carries a patch suffix.
fn prefix_match<'a>(
    requested: &str,
    candidates: &'a [LifecycleRecord],
) -> Option<&'a LifecycleRecord> {
    candidates.iter().find(|c| requested.starts_with(&c.cycle))
}

/// Tier 3: the first two dot-separated components agree.
fn semantic_match<'a>(
    requested: &str,
    candidates: &'a [LifecycleRecord],
) -> Option<&'a LifecycleRecord> {
    let requested_parts: Vec<&str> = requested.split('.').collect();
    if requested_parts.len() < 2 {
        return None;
    }

    candidates.iter().find(|c| {
        let cycle_parts: Vec<&str> = c.cycle.split('.').collect();
        cycle_parts.len() >= 2
            && requested_parts[0] == cycle_parts[0]
            && requested_parts[1] == cycle_parts[1]
    })
}

/// Tier 4: the cycle id starts with the requested major version and a dot.
fn major_match<'a>(
    requested: &str,
    candidates: &'a [LifecycleRecord],
) -> Option<&'a LifecycleRecord> {
    let major = requested.split('.').next()?;
    let prefix = format!("{major}.");
    candidates.iter().find(|c| c.cycle.starts_with(&prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(cycle: &str) -> LifecycleRecord {
        LifecycleRecord {
            cycle: cycle.to_string(),
            release_date: String::new(),
            eol: Default::default(),
            latest: String::new(),
            link: None,
            support: Default::default(),
            discontinued: Default::default(),
        }
    }

    fn records(cycles: &[&str]) -> Vec<LifecycleRecord> {
        cycles.iter().map(|c| record(c)).collect()
    }

    #[rstest]
    #[case("1.20", &["1.21", "1.20", "1.19"], "1.20")] // exact
    #[case("1.20.4", &["1.21", "1.20", "1.19"], "1.20")] // prefix
    #[case("20.04.6", &["22.04", "20.04"], "20.04")] // prefix over semantic
    #[case("18.19", &["20", "18"], "18")] // prefix via leading component
    fn resolve_picks_expected_cycle(
        #[case] requested: &str,
        #[case] cycles: &[&str],
        #[case] expected: &str,
    ) {
        let candidates = records(cycles);
        let resolved = resolve(requested, &candidates).unwrap();
        assert_eq!(resolved.cycle, expected);
    }

    #[test]
    fn exact_match_wins_over_looser_tiers_regardless_of_position() {
        // "1.2" would prefix-match the earlier "1" candidate, but an exact
        // "1.2" exists later in the list.
        let candidates = records(&["1", "1.2"]);
        let resolved = resolve("1.2", &candidates).unwrap();
        assert_eq!(resolved.cycle, "1.2");
    }

    #[test]
    fn semantic_match_selects_major_minor_cycle() {
        // No exact "1.20.1" and no prefix match (cycles carry patch digits),
        // so the major.minor components decide.
        let candidates = records(&["1.21.0", "1.20.9", "1.19.0"]);
        let resolved = resolve("1.20.1", &candidates).unwrap();
        assert_eq!(resolved.cycle, "1.20.9");
    }

    #[test]
    fn major_match_is_the_last_resort() {
        let candidates = records(&["19.1", "18.20"]);
        let resolved = resolve("18", &candidates).unwrap();
        assert_eq!(resolved.cycle, "18.20");
    }

    #[test]
    fn first_candidate_in_input_order_wins_within_a_tier() {
        let candidates = records(&["1.20.9", "1.20.4"]);
        let resolved = resolve("1.20.1", &candidates).unwrap();
        assert_eq!(resolved.cycle, "1.20.9");
    }

    #[rstest]
    #[case("", &["1.20"])]
    #[case("1.20", &[])]
    #[case("3.0", &["1.20", "2.4"])]
    fn resolve_yields_none_when_nothing_matches(#[case] requested: &str, #[case] cycles: &[&str]) {
        let candidates = records(cycles);
        assert!(resolve(requested, &candidates).is_none());
    }
}
