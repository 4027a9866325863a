use super::common::*;
use crate::scoring::AnswerField;

#[test]
fn neutral_answers_ask_for_validation_work() {
    let result = engine().compute(&answers(3));

    assert_eq!(
        result.next_steps,
        vec![
            "Clarify your target audience through customer interviews",
            "Validate that the problem is painful enough to pay for",
            "Research what customers currently pay for alternatives",
            "Address key weaknesses before investing heavily in development",
        ]
    );
}

#[test]
fn strong_ideas_get_fixed_launch_plan() {
    let mut answers = answers(5);
    answers.icp_specific = true;

    let result = engine().compute(&answers);

    assert_eq!(result.strengths.len(), 8);
    assert_eq!(
        result.risks,
        vec!["Crowded niche with strong incumbents competing for the same customers"]
    );
    assert_eq!(result.next_steps.len(), 3);
    assert!(result.next_steps[0].starts_with("Build and test your MVP"));
    assert!(result.next_steps[1].starts_with("Validate pricing"));
}

#[test]
fn weak_ideas_are_steered_toward_pivoting() {
    let result = engine().compute(&answers(1));

    assert!(result.strengths.is_empty());
    assert_eq!(result.risks.len(), 6);
    assert_eq!(
        result.next_steps,
        vec![
            "Consider pivoting or significantly refining the core idea",
            "Find a more critical problem that customers urgently need solved",
            "Narrow down to a specific customer segment with a clear need",
            "Conduct extensive market research before building anything",
        ]
    );
}

#[test]
fn weak_tier_skips_conditional_steps_when_basics_are_clear() {
    let answers = answers_with(
        1,
        &[
            (AnswerField::ProblemSeverity, 3),
            (AnswerField::AudienceClarity, 3),
        ],
    );

    let result = engine().compute(&answers);

    assert!(result.score < 50);
    assert_eq!(result.next_steps.len(), 2);
    assert!(result.next_steps[0].starts_with("Consider pivoting"));
    assert!(result.next_steps[1].starts_with("Conduct extensive market research"));
}

#[test]
fn middle_tier_only_appends_weakness_step_when_basics_are_strong() {
    let answers = answers_with(
        3,
        &[
            (AnswerField::AudienceClarity, 4),
            (AnswerField::ProblemSeverity, 4),
            (AnswerField::WillingnessToPay, 4),
            (AnswerField::Reachability, 1),
            (AnswerField::RecurringUse, 1),
        ],
    );

    let result = engine().compute(&answers);

    assert!((50..70).contains(&result.score), "score {}", result.score);
    assert_eq!(
        result.next_steps,
        vec!["Address key weaknesses before investing heavily in development"]
    );
}

#[test]
fn strengths_and_risks_keep_declared_order() {
    let answers = answers_with(
        3,
        &[
            (AnswerField::RecurringUse, 5),
            (AnswerField::ProblemSeverity, 5),
            (AnswerField::CompetitionDensity, 4),
            (AnswerField::WillingnessToPay, 2),
        ],
    );

    let result = engine().compute(&answers);

    assert_eq!(result.strengths.len(), 2);
    assert!(result.strengths[0].contains("painful"));
    assert!(result.strengths[1].contains("usage"));
    assert_eq!(result.risks.len(), 2);
    assert!(result.risks[0].contains("reluctant to pay"));
    assert!(result.risks[1].contains("Crowded niche"));
}
