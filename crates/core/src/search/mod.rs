//! The seed-search kernel.
//!
//! Parse the filter once, then walk an inclusive seed interval evaluating it.
//! The loop is synchronous and single-threaded; the two callbacks are its
//! only observation points, and returning `false` from either one is the only
//! way to stop it early besides the local match cap. Hosts parallelize by
//! splitting the interval and running one loop per worker.

mod eval;
mod filter;

pub use eval::evaluate_filter;
pub use filter::{
    parse_filter, Condition, DayRange, EventTarget, FilterNode, FilterParseError, GroupLogic,
    WeatherTarget, MAX_DAY,
};

use crate::version::GameVersion;

/// Seeds evaluated between progress callbacks.
pub const PROGRESS_CHUNK: u64 = 10_000;

/// Counters handed back when the loop stops, whatever the reason. The
/// terminal states (range exhausted, callback cancellation, match cap) are
/// deliberately not distinguishable beyond these counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Seeds evaluated.
    pub checked: u64,
    /// Seeds that matched.
    pub found: u64,
}

/// The loop's internal lifecycle: `Running` until the range ends, a callback
/// returns `false`, or the local cap is hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopState {
    Running,
    Exhausted,
    Cancelled,
    LimitReached,
}

/// Search `[seed_lo, seed_hi]` for seeds matching `filter_json`.
///
/// `on_match` runs once per matching seed; `on_progress` runs every
/// [`PROGRESS_CHUNK`] evaluations and once more when the loop stops. Either
/// callback cancels the search by returning `false`. At most `max_results`
/// matches are reported.
///
/// A malformed filter fails synchronously, before any seed is evaluated.
pub fn search_range(
    filter_json: &str,
    seed_lo: i32,
    seed_hi: i32,
    max_results: u32,
    version: GameVersion,
    mut on_progress: impl FnMut(u64, u64) -> bool,
    on_match: impl FnMut(i32) -> bool,
) -> Result<SearchSummary, FilterParseError> {
    let filter = parse_filter(filter_json)?;

    let (_state, checked, found) =
        run_loop(&filter, seed_lo, seed_hi, max_results, version, &mut on_progress, on_match);

    // Final counters always go out, whatever ended the loop.
    on_progress(checked, found);

    Ok(SearchSummary { checked, found })
}

fn run_loop(
    filter: &FilterNode,
    seed_lo: i32,
    seed_hi: i32,
    max_results: u32,
    version: GameVersion,
    on_progress: &mut impl FnMut(u64, u64) -> bool,
    mut on_match: impl FnMut(i32) -> bool,
) -> (LoopState, u64, u64) {
    let mut checked = 0u64;
    let mut found = 0u64;
    let mut state = LoopState::Running;

    for seed in seed_lo..=seed_hi {
        let matched = evaluate_filter(seed, filter, version);
        checked += 1;

        if matched {
            found += 1;
            if !on_match(seed) {
                state = LoopState::Cancelled;
                break;
            }
            if found >= u64::from(max_results) {
                state = LoopState::LimitReached;
                break;
            }
        }

        if checked % PROGRESS_CHUNK == 0 && !on_progress(checked, found) {
            state = LoopState::Cancelled;
            break;
        }
    }
    if state == LoopState::Running {
        state = LoopState::Exhausted;
    }

    (state, checked, found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTHQUAKE_FILTER: &str = r#"{ "logic": "and", "conditions": [
        { "logic": "condition", "type": "night_event",
          "day_start": 29, "day_end": 29, "event_type": "earthquake" } ] }"#;

    const LUCK_FILTER: &str = r#"{ "logic": "condition", "type": "daily_luck",
        "day_start": 1, "day_end": 7, "min_luck": 0.09, "max_luck": 1.0 }"#;

    #[test]
    fn every_seed_quakes_on_day_29() {
        let mut matches = Vec::new();
        let summary = search_range(
            EARTHQUAKE_FILTER,
            1,
            1_000,
            u32::MAX,
            GameVersion::V1_6,
            |_, _| true,
            |seed| {
                matches.push(seed);
                true
            },
        )
        .expect("filter should parse");

        assert_eq!(summary.checked, 1_000);
        assert_eq!(summary.found, 1_000);
        assert_eq!(matches, (1..=1_000).collect::<Vec<i32>>());
    }

    #[test]
    fn match_cap_stops_the_loop() {
        let summary = search_range(
            EARTHQUAKE_FILTER,
            1,
            1_000,
            3,
            GameVersion::V1_6,
            |_, _| true,
            |_| true,
        )
        .expect("filter should parse");

        assert_eq!(summary.found, 3);
        assert_eq!(summary.checked, 3);
    }

    #[test]
    fn match_callback_can_cancel() {
        let mut reported = 0;
        let summary = search_range(
            EARTHQUAKE_FILTER,
            1,
            1_000,
            u32::MAX,
            GameVersion::V1_6,
            |_, _| true,
            |_| {
                reported += 1;
                reported < 5
            },
        )
        .expect("filter should parse");

        assert_eq!(reported, 5);
        assert_eq!(summary.found, 5);
        assert_eq!(summary.checked, 5);
    }

    #[test]
    fn progress_callback_can_cancel() {
        let summary = search_range(
            LUCK_FILTER,
            1,
            100_000,
            u32::MAX,
            GameVersion::V1_6,
            |checked, _| checked < 30_000,
            |_| true,
        )
        .expect("filter should parse");

        assert_eq!(summary.checked, 30_000);
    }

    #[test]
    fn progress_fires_on_chunk_boundaries_and_at_the_end() {
        let mut reports = Vec::new();
        let summary = search_range(
            LUCK_FILTER,
            1,
            25_000,
            u32::MAX,
            GameVersion::V1_6,
            |checked, _| {
                reports.push(checked);
                true
            },
            |_| true,
        )
        .expect("filter should parse");

        assert_eq!(reports, vec![10_000, 20_000, 25_000]);
        assert_eq!(summary.checked, 25_000);
    }

    #[test]
    fn malformed_filters_fail_before_iteration() {
        let mut progressed = false;
        let result = search_range(
            "{ nope",
            1,
            10,
            u32::MAX,
            GameVersion::V1_6,
            |_, _| {
                progressed = true;
                true
            },
            |_| true,
        );
        assert!(result.is_err());
        assert!(!progressed, "callbacks must not run for a bad filter");
    }

    #[test]
    fn two_identical_searches_emit_identical_matches() {
        let run = || {
            let mut matches = Vec::new();
            search_range(
                LUCK_FILTER,
                -20_000,
                20_000,
                u32::MAX,
                GameVersion::V1_5,
                |_, _| true,
                |seed| {
                    matches.push(seed);
                    true
                },
            )
            .expect("filter should parse");
            matches
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn loop_reports_its_terminal_state() {
        let filter = parse_filter(EARTHQUAKE_FILTER).expect("filter should parse");

        let (state, _, _) =
            run_loop(&filter, 1, 50, u32::MAX, GameVersion::V1_6, &mut |_, _| true, |_| true);
        assert_eq!(state, LoopState::Exhausted);

        let (state, _, _) =
            run_loop(&filter, 1, 50, 2, GameVersion::V1_6, &mut |_, _| true, |_| true);
        assert_eq!(state, LoopState::LimitReached);

        let (state, _, _) =
            run_loop(&filter, 1, 50, u32::MAX, GameVersion::V1_6, &mut |_, _| true, |_| false);
        assert_eq!(state, LoopState::Cancelled);
    }

    #[test]
    fn range_ends_are_inclusive() {
        let summary = search_range(
            EARTHQUAKE_FILTER,
            7,
            7,
            u32::MAX,
            GameVersion::V1_3,
            |_, _| true,
            |_| true,
        )
        .expect("filter should parse");
        assert_eq!(summary.checked, 1);
        assert_eq!(summary.found, 1);
    }
}
