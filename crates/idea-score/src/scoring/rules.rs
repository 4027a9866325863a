use super::answers::{AnswerField, Answers};
use serde::{Deserialize, Serialize};

/// Predicate over raw answers used by adjustment and insight rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum Condition {
    AtLeast { field: AnswerField, value: u8 },
    AtMost { field: AnswerField, value: u8 },
    Equals { field: AnswerField, value: u8 },
    IcpSpecific,
}

impl Condition {
    pub fn at_least(field: AnswerField, value: u8) -> Self {
        Condition::AtLeast { field, value }
    }

    pub fn at_most(field: AnswerField, value: u8) -> Self {
        Condition::AtMost { field, value }
    }

    pub fn equals(field: AnswerField, value: u8) -> Self {
        Condition::Equals { field, value }
    }

    pub fn holds(&self, answers: &Answers) -> bool {
        match self {
            Condition::AtLeast { field, value } => answers.rating(*field) >= i32::from(*value),
            Condition::AtMost { field, value } => answers.rating(*field) <= i32::from(*value),
            Condition::Equals { field, value } => answers.rating(*field) == i32::from(*value),
            Condition::IcpSpecific => answers.icp_specific,
        }
    }

    pub(crate) fn threshold(&self) -> Option<(AnswerField, u8)> {
        match self {
            Condition::AtLeast { field, value }
            | Condition::AtMost { field, value }
            | Condition::Equals { field, value } => Some((*field, *value)),
            Condition::IcpSpecific => None,
        }
    }
}

/// An empty condition list always holds.
pub(crate) fn all_hold(conditions: &[Condition], answers: &Answers) -> bool {
    conditions.iter().all(|condition| condition.holds(answers))
}

/// Additive bonus or penalty applied to the weighted base score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRule {
    pub key: String,
    pub conditions: Vec<Condition>,
    pub points: i32,
}

impl AdjustmentRule {
    pub fn new(key: impl Into<String>, conditions: Vec<Condition>, points: i32) -> Self {
        Self {
            key: key.into(),
            conditions,
            points,
        }
    }

    pub fn triggers(&self, answers: &Answers) -> bool {
        all_hold(&self.conditions, answers)
    }
}

/// Fixed text emitted when every condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRule {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub text: String,
}

impl InsightRule {
    pub fn when(condition: Condition, text: impl Into<String>) -> Self {
        Self {
            conditions: vec![condition],
            text: text.into(),
        }
    }

    pub fn always(text: impl Into<String>) -> Self {
        Self {
            conditions: Vec::new(),
            text: text.into(),
        }
    }

    pub fn triggers(&self, answers: &Answers) -> bool {
        all_hold(&self.conditions, answers)
    }
}

/// Triggered adjustment recorded in a score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub key: String,
    pub points: i32,
}

pub(crate) fn triggered_adjustments<'a>(
    rules: impl IntoIterator<Item = &'a AdjustmentRule>,
    answers: &Answers,
) -> Vec<Adjustment> {
    rules
        .into_iter()
        .filter(|rule| rule.triggers(answers))
        .map(|rule| Adjustment {
            key: rule.key.clone(),
            points: rule.points,
        })
        .collect()
}

pub(crate) fn triggered_texts(rules: &[InsightRule], answers: &Answers) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.triggers(answers))
        .map(|rule| rule.text.clone())
        .collect()
}
