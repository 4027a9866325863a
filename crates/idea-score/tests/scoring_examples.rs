use idea_score::payload::{decode_link, result_link};
use idea_score::scoring::{AnswerField, Answers, ScoringEngine, Verdict};
use idea_score::{compute_score, verdict_for};

#[test]
fn all_neutral_ratings_are_promising() {
    let result = compute_score(&Answers::uniform(3));

    assert_eq!(result.score, 60);
    assert_eq!(result.verdict, Verdict::Promising);
    assert_eq!(result.subscores.market, 60);
    assert_eq!(result.next_steps.len(), 4);
}

#[test]
fn all_favourable_ratings_with_specific_icp_are_strong() {
    let mut answers = Answers::uniform(5);
    answers.icp_specific = true;

    let result = compute_score(&answers);

    assert_eq!(result.score, 97);
    assert_eq!(result.verdict, Verdict::Strong);
    assert_eq!(result.subscores.competition_moat, 60);
    assert_eq!(result.subscores.monetization, 80);
}

#[test]
fn all_unfavourable_ratings_are_weak_and_suggest_a_pivot() {
    let result = compute_score(&Answers::uniform(1));

    assert_eq!(result.score, 20);
    assert_eq!(result.verdict, Verdict::Weak);
    let expected_prefixes = [
        "Consider pivoting",
        "Find a more critical problem",
        "Narrow down to a specific customer segment",
        "Conduct extensive market research",
    ];
    assert_eq!(result.next_steps.len(), expected_prefixes.len());
    for (step, prefix) in result.next_steps.iter().zip(expected_prefixes) {
        assert!(step.starts_with(prefix), "{step} should start with {prefix}");
    }
}

#[test]
fn boundary_scores_use_inclusive_lower_bounds() {
    assert_eq!(verdict_for(80), Verdict::Strong);
    assert_eq!(verdict_for(60), Verdict::Promising);
    assert_eq!(verdict_for(40), Verdict::Risky);
}

#[test]
fn a_scored_idea_survives_the_result_link() {
    let engine = ScoringEngine::standard();
    let mut answers = Answers::uniform(4);
    answers.set(AnswerField::CompetitionDensity, 5);
    answers.set(AnswerField::PricingLeverage, 2);
    let result = engine.evaluate(&answers).expect("answers are in range");

    let link = result_link("https://ideas.example.com", &result).expect("link builds");
    let decoded = decode_link(&link).expect("link decodes");

    assert_eq!(decoded, result);
    assert_eq!(decoded.chip().to_string(), format!("{} / 100 · {}", result.score, result.verdict));
}
