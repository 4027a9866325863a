use super::answers::Answers;
use super::rules::{triggered_texts, Condition, InsightRule};
use serde::{Deserialize, Serialize};

/// Templated observations keyed off raw answers and the headline score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightCatalog {
    pub strengths: Vec<InsightRule>,
    pub risks: Vec<InsightRule>,
    /// Ordered by descending `min_score`; the first tier reached applies.
    pub next_steps: Vec<NextStepTier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStepTier {
    pub min_score: u8,
    pub steps: Vec<InsightRule>,
}

impl InsightCatalog {
    pub fn tier_for(&self, score: u8) -> Option<&NextStepTier> {
        self.next_steps.iter().find(|tier| score >= tier.min_score)
    }

    pub(crate) fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.strengths
            .iter()
            .chain(self.risks.iter())
            .chain(self.next_steps.iter().flat_map(|tier| tier.steps.iter()))
            .flat_map(|rule| rule.conditions.iter())
    }
}

pub(crate) struct Insights {
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub next_steps: Vec<String>,
}

pub(crate) fn generate_insights(catalog: &InsightCatalog, answers: &Answers, score: u8) -> Insights {
    let next_steps = catalog
        .tier_for(score)
        .map(|tier| triggered_texts(&tier.steps, answers))
        .unwrap_or_default();

    Insights {
        strengths: triggered_texts(&catalog.strengths, answers),
        risks: triggered_texts(&catalog.risks, answers),
        next_steps,
    }
}
