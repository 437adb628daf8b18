#![expect(
    clippy::expect_used,
    reason = "property setup should fail fast when the engine cannot be built"
)]

//! Property-based tests for both decision strategies.
//!
//! # Invariants tested
//!
//! - **Subset:** every result id comes from the request, at most once, and
//!   there are never more results than locations.
//! - **Exclusions:** tableless locations and locations beyond the radius
//!   never appear in the results.
//! - **Accounting:** results plus every diagnostic bucket add up to the
//!   number of candidates.
//! - **Ordering:** relaxed results are sorted by ascending distance and
//!   scored results by descending score.

use std::collections::HashSet;

use geo::Coord;
use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use quietseat_core::test_support::{SEOUL_ORIGIN, reference_clock, reference_now};
use quietseat_core::{
    DecisionConfig, DecisionRequest, DecisionResponse, FixedClock, Location, haversine_km,
};
use quietseat_decider::{DecisionEngine, Strategy};

fn engine() -> DecisionEngine<FixedClock> {
    DecisionEngine::with_clock(DecisionConfig::default(), reference_clock())
        .expect("default configuration is valid")
}

/// Locations scattered within roughly two kilometres of the origin so that
/// both sides of the radius are exercised.
fn location_strategy() -> impl proptest::strategy::Strategy<Value = Location> {
    (
        -0.02_f64..=0.02_f64,
        -0.02_f64..=0.02_f64,
        0_u32..=20,
        0_u32..=25,
        0.0_f64..=5.0_f64,
        prop::option::of(0_i64..=120),
    )
        .prop_map(|(dx, dy, total, occupied, rating, minutes_ago)| {
            #[expect(
                clippy::float_arithmetic,
                reason = "offsets are added to the origin coordinates"
            )]
            let position = Coord {
                x: SEOUL_ORIGIN.x + dx,
                y: SEOUL_ORIGIN.y + dy,
            };
            let location = Location::new(0, position, total, occupied).with_rating(rating);
            match minutes_ago {
                Some(minutes) => location
                    .with_last_event_at(reference_now() - chrono::Duration::minutes(minutes)),
                None => location,
            }
        })
}

fn request_strategy() -> impl proptest::strategy::Strategy<Value = DecisionRequest> {
    prop::collection::vec(location_strategy(), 0..24).prop_map(|mut locations| {
        for (id, location) in (1_u64..).zip(locations.iter_mut()) {
            location.id = id;
        }
        DecisionRequest::new(SEOUL_ORIGIN, locations)
    })
}

fn any_strategy() -> impl proptest::strategy::Strategy<Value = Strategy> {
    prop_oneof![Just(Strategy::Relaxed), Just(Strategy::Scored)]
}

fn find<'a>(request: &'a DecisionRequest, id: u64) -> &'a Location {
    request
        .locations
        .iter()
        .find(|location| location.id == id)
        .expect("result ids come from the request")
}

fn check_subset(request: &DecisionRequest, response: &DecisionResponse) {
    let ids: HashSet<_> = request.locations.iter().map(|location| location.id).collect();
    let mut seen = HashSet::new();
    for result in &response.results {
        assert!(ids.contains(&result.id), "unknown id {}", result.id);
        assert!(seen.insert(result.id), "duplicate id {}", result.id);
        assert!(result.qualifies);
    }
    assert!(response.results.len() <= request.locations.len());
    assert_eq!(response.count, response.results.len());
}

proptest! {
    #[test]
    fn results_are_a_subset_of_the_request(
        request in request_strategy(),
        strategy in any_strategy(),
    ) {
        let response = engine().decide(strategy, &request);
        check_subset(&request, &response);
    }

    #[test]
    fn excluded_locations_never_appear(
        request in request_strategy(),
        strategy in any_strategy(),
    ) {
        let response = engine().decide(strategy, &request);
        for result in &response.results {
            let location = find(&request, result.id);
            prop_assert!(location.table_total > 0);
            prop_assert!(haversine_km(request.origin, location.position) <= 1.0);
        }
    }

    #[test]
    fn diagnostics_account_for_every_candidate(
        request in request_strategy(),
        strategy in any_strategy(),
    ) {
        let response = engine().decide(strategy, &request);
        let diagnostics = response.diagnostics;
        prop_assert_eq!(diagnostics.candidates, request.locations.len());
        prop_assert_eq!(
            response.count
                + diagnostics.beyond_radius
                + diagnostics.not_evaluable
                + diagnostics.rejected,
            diagnostics.candidates
        );
    }

    #[test]
    fn relaxed_results_are_nearest_first(request in request_strategy()) {
        let response = engine().decide(Strategy::Relaxed, &request);
        for pair in response.results.windows(2) {
            if let [earlier, later] = pair {
                prop_assert!(earlier.distance_km <= later.distance_km);
                prop_assert!(earlier.score.is_none());
            }
        }
    }

    #[test]
    fn scored_results_are_best_first(request in request_strategy()) {
        let response = engine().decide(Strategy::Scored, &request);
        for pair in response.results.windows(2) {
            if let [earlier, later] = pair {
                prop_assert!(earlier.score >= later.score);
            }
        }
        for result in &response.results {
            prop_assert!(result.score.is_some_and(|score| score >= 50.0));
        }
    }
}
