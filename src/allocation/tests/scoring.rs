use super::common::*;
use crate::allocation::scoring::composite_score;
use crate::config::{NormalizationCaps, ScoreWeights};

#[test]
fn composite_score_weights_each_attribute() {
    let mut config = allocation_config();
    config.weights = ScoreWeights {
        performance_score: 1.0,
        seniority_months: 1.0,
        target_achieved_percent: 1.0,
        active_clients: 1.0,
    };
    config.normalization_caps = NormalizationCaps {
        seniority_months: 24,
        active_clients: 20,
    };

    // 80 + (12/24)*100 + 80 + (10/20)*100
    let score = composite_score(&agent("A1", 80.0, 12, 80.0, 10), &config);
    assert_eq!(score, 260.0);
}

#[test]
fn attributes_at_or_past_the_cap_contribute_the_ceiling() {
    let config = allocation_config();

    let at_cap = composite_score(&agent("A1", 50.0, 60, 50.0, 20), &config);
    let past_cap = composite_score(&agent("A2", 50.0, 240, 50.0, 95), &config);

    assert_eq!(at_cap, past_cap);

    // With unit weights the capped terms each contribute exactly 100.
    let mut unit = config;
    unit.weights = ScoreWeights {
        performance_score: 0.0,
        seniority_months: 1.0,
        target_achieved_percent: 0.0,
        active_clients: 1.0,
    };
    assert_eq!(composite_score(&agent("A3", 0.0, 60, 0.0, 20), &unit), 200.0);
}

#[test]
fn zero_weights_yield_a_zero_score() {
    let mut config = allocation_config();
    config.weights = ScoreWeights {
        performance_score: 0.0,
        seniority_months: 0.0,
        target_achieved_percent: 0.0,
        active_clients: 0.0,
    };

    assert_eq!(composite_score(&agent("A1", 95.0, 36, 98.0, 15), &config), 0.0);
}

#[test]
fn higher_attributes_never_score_lower() {
    let config = allocation_config();

    let weaker = composite_score(&agent("A1", 55.0, 2, 40.0, 5), &config);
    let stronger = composite_score(&agent("A2", 95.0, 36, 98.0, 15), &config);

    assert!(stronger > weaker);
}
