use super::common::*;
use crate::scoring::{
    AdjustmentRule, AnswerField, BandThresholds, Condition, ScoringConfig, ScoringEngine,
    ScoringError,
};

fn rejection_reason(config: ScoringConfig) -> String {
    match ScoringEngine::try_new(config) {
        Err(ScoringError::InvalidRubric { reason }) => reason,
        Err(other) => panic!("expected rubric error, got {other:?}"),
        Ok(_) => panic!("expected rubric to be rejected"),
    }
}

#[test]
fn standard_rubric_is_valid() {
    let config = ScoringConfig::standard();

    assert!(config.validate().is_ok());
    assert_eq!(config.weights.total(), 20);
    assert_eq!(config.bonuses.len(), 3);
    assert_eq!(config.penalties.len(), 4);
}

#[test]
fn rubric_loads_from_json() {
    let json = serde_json::to_string(&ScoringConfig::standard()).expect("rubric serializes");

    let parsed: ScoringConfig = serde_json::from_str(&json).expect("rubric parses");

    assert_eq!(parsed, ScoringConfig::standard());
    assert!(json.contains(r#""when":"icp_specific""#));
    assert!(json.contains(r#""field":"competitionDensity""#));
}

#[test]
fn rejects_overlapping_band_thresholds() {
    let mut config = ScoringConfig::standard();
    config.bands = BandThresholds {
        strong: 60,
        promising: 60,
        risky: 40,
    };

    assert!(rejection_reason(config).contains("band thresholds"));
}

#[test]
fn rejects_bonus_that_deducts_points() {
    let mut config = ScoringConfig::standard();
    config.bonuses.push(AdjustmentRule::new(
        "backwards",
        vec![Condition::at_least(AnswerField::Reachability, 4)],
        -2,
    ));

    assert!(rejection_reason(config).contains("backwards"));
}

#[test]
fn rejects_thresholds_outside_rating_range() {
    let mut config = ScoringConfig::standard();
    config.penalties.push(AdjustmentRule::new(
        "impossible",
        vec![Condition::at_least(AnswerField::OrganicPotential, 7)],
        -1,
    ));

    assert!(rejection_reason(config).contains("outside 1..=5"));
}

#[test]
fn rejects_next_steps_without_floor_tier() {
    let mut config = ScoringConfig::standard();
    config.insights.next_steps.pop();

    assert!(rejection_reason(config).contains("score 0"));
}

#[test]
fn rule_variants_can_be_tested_in_isolation() {
    let mut config = config_without_adjustments();
    config.bonuses.push(AdjustmentRule::new(
        "fast_sticky_mvp",
        vec![
            Condition::at_least(AnswerField::MvpFeasibility, 4),
            Condition::at_least(AnswerField::RecurringUse, 4),
        ],
        2,
    ));
    let engine = ScoringEngine::try_new(config).expect("rubric valid");

    let sticky = answers_with(
        3,
        &[
            (AnswerField::MvpFeasibility, 4),
            (AnswerField::RecurringUse, 4),
        ],
    );
    let breakdown = engine.breakdown(&sticky);

    assert_eq!(breakdown.base, 64);
    assert_eq!(breakdown.adjustments.len(), 1);
    assert_eq!(breakdown.score, 66);
}

#[test]
fn rejects_oversized_weight() {
    let mut config = ScoringConfig::standard();
    config.weights.problem_severity = i32::MAX / 2;

    let reason = rejection_reason(config);

    assert!(reason.contains("problemSeverity"));
    assert!(reason.contains("0..=100"));
}

#[test]
fn rejects_oversized_adjustment() {
    let mut config = ScoringConfig::standard();
    config.penalties.push(AdjustmentRule::new(
        "wipeout",
        vec![Condition::at_most(AnswerField::Reachability, 1)],
        i32::MIN,
    ));

    assert!(rejection_reason(config).contains("wipeout"));
}

#[test]
fn unvalidated_extreme_rubric_saturates_instead_of_overflowing() {
    let mut config = ScoringConfig::standard();
    config.weights.problem_severity = i32::MAX / 2;
    config.bonuses.push(AdjustmentRule::new(
        "huge",
        vec![Condition::at_least(AnswerField::ProblemSeverity, 1)],
        i32::MAX,
    ));
    let engine = ScoringEngine::new(config);

    let breakdown = engine.breakdown(&answers(5));

    assert_eq!(breakdown.base, i32::MAX);
    assert_eq!(breakdown.total, i32::MAX);
    assert_eq!(breakdown.score, 100);
}
