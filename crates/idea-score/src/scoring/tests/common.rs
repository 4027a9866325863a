use crate::scoring::{AnswerField, Answers, ScoringConfig, ScoringEngine};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn answers(value: u8) -> Answers {
    Answers::uniform(value)
}

pub(super) fn answers_with(value: u8, overrides: &[(AnswerField, u8)]) -> Answers {
    let mut answers = Answers::uniform(value);
    for (field, rating) in overrides {
        answers.set(*field, *rating);
    }
    answers
}

pub(super) fn config_without_adjustments() -> ScoringConfig {
    let mut config = ScoringConfig::standard();
    config.bonuses.clear();
    config.penalties.clear();
    config
}
