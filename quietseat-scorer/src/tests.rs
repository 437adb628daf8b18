//! Unit coverage for normalisation and weighting helpers.
#![forbid(unsafe_code)]

use quietseat_core::{Elapsed, Evaluation, ScoreWeights};
use rstest::rstest;

use crate::{
    ScoreBreakdown, WeightedScorer, normalise_distance, normalise_occupancy, normalise_rating,
    normalise_recency, weighted_score,
};

#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected approximately {expected}, got {actual}"
    );
}

#[rstest]
#[case(0.0, 100.0)]
#[case(0.25, 75.0)]
#[case(1.0, 0.0)]
#[case(3.0, 0.0)]
fn distance_scales_against_radius(#[case] distance_km: f64, #[case] expected: f64) {
    assert_close(normalise_distance(distance_km, 1.0), expected);
}

#[rstest]
#[case(0.0, 100.0)]
#[case(30.0, 70.0)]
#[case(100.0, 0.0)]
#[case(150.0, 0.0)]
fn occupancy_clamps_at_full(#[case] occupancy_rate: f64, #[case] expected: f64) {
    assert_close(normalise_occupancy(occupancy_rate), expected);
}

#[rstest]
#[case(0.0, 0.0)]
#[case(4.5, 90.0)]
#[case(5.0, 100.0)]
#[case(6.0, 120.0)]
fn rating_is_proportional_and_unclamped(#[case] rating: f64, #[case] expected: f64) {
    assert_close(normalise_rating(rating), expected);
}

#[rstest]
#[case(Elapsed::Minutes(0.0), 0.0)]
#[case(Elapsed::Minutes(15.0), 25.0)]
#[case(Elapsed::Minutes(60.0), 100.0)]
#[case(Elapsed::Minutes(600.0), 100.0)]
#[case(Elapsed::Never, 100.0)]
fn recency_saturates_after_an_hour(#[case] elapsed: Elapsed, #[case] expected: f64) {
    assert_close(normalise_recency(elapsed), expected);
}

#[rstest]
fn weights_are_not_renormalised() {
    let breakdown = ScoreBreakdown {
        distance: 100.0,
        occupancy: 100.0,
        rating: 100.0,
        recency: 100.0,
    };
    let doubled = ScoreWeights {
        distance: 0.5,
        occupancy: 0.5,
        rating: 0.5,
        recency: 0.5,
    };
    assert_close(weighted_score(breakdown, doubled), 200.0);
}

#[rstest]
fn composite_is_rounded_to_two_decimals() {
    let breakdown = ScoreBreakdown {
        distance: 92.906_3,
        occupancy: 70.0,
        rating: 90.0,
        recency: 100.0,
    };
    assert_close(weighted_score(breakdown, ScoreWeights::default()), 85.73);
}

#[rstest]
fn scorer_reports_breakdown_for_reference_venue() {
    let evaluation = Evaluation {
        id: 1,
        distance_km: 0.07,
        occupancy_rate: 30.0,
        rating: 4.5,
        elapsed: Elapsed::Never,
    };
    let scorer = WeightedScorer::new(ScoreWeights::default(), 1.0);

    let breakdown = scorer.breakdown(&evaluation);

    assert_close(breakdown.distance, 93.0);
    assert_close(breakdown.occupancy, 70.0);
    assert_close(breakdown.rating, 90.0);
    assert_close(breakdown.recency, 100.0);
    assert_close(scorer.score(&evaluation), 85.75);
}
