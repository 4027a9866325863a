//! Weighted idea scoring with declarative bonus, penalty, and insight rules.

mod answers;
mod config;
mod insights;
mod rules;
mod subscores;
mod verdict;

#[cfg(test)]
mod tests;

pub use answers::{AnswerField, Answers, DEFAULT_PRICING_LEVERAGE, RATING_MAX, RATING_MIN};
pub use config::{ScoringConfig, Weights, MAX_ADJUSTMENT_POINTS, MAX_WEIGHT};
pub use insights::{InsightCatalog, NextStepTier};
pub use rules::{Adjustment, AdjustmentRule, Condition, InsightRule};
pub use subscores::Subscores;
pub use verdict::{
    band_label, get_band, verdict_for, BandThresholds, ScoreBand, ScoreChip, Verdict, SCORE_MAX,
    SCORE_MIN,
};

use insights::generate_insights;
use rules::triggered_adjustments;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer that applies the rubric configuration to a set of answers.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Self {
        Self::new(ScoringConfig::standard())
    }

    pub fn try_new(config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Weighted sum of oriented ratings before any adjustment or clamping.
    pub fn base_score(&self, answers: &Answers) -> i32 {
        AnswerField::ALL.iter().fold(0i32, |base, field| {
            let weighted = answers
                .oriented(*field)
                .saturating_mul(self.config.weights.get(*field));
            base.saturating_add(weighted)
        })
    }

    pub fn breakdown(&self, answers: &Answers) -> ScoreBreakdown {
        let base = self.base_score(answers);
        let adjustments = triggered_adjustments(self.config.adjustments(), answers);
        let total = adjustments
            .iter()
            .fold(base, |total, adj| total.saturating_add(adj.points));
        let score = verdict::clamp_score(total);

        debug!(base, total, score, adjustments = adjustments.len(), "scored answers");

        ScoreBreakdown {
            base,
            adjustments,
            total,
            score,
        }
    }

    /// Scores answers without range checks; out-of-range ratings flow through arithmetically.
    pub fn compute(&self, answers: &Answers) -> ScoreResult {
        let ScoreBreakdown { score, .. } = self.breakdown(answers);
        let insights = generate_insights(&self.config.insights, answers, score);

        ScoreResult {
            score,
            verdict: self.config.bands.verdict(score),
            subscores: Subscores::from_answers(answers),
            strengths: insights.strengths,
            risks: insights.risks,
            next_steps: insights.next_steps,
        }
    }

    /// Rejects ratings outside 1..=5 before scoring.
    pub fn evaluate(&self, answers: &Answers) -> Result<ScoreResult, ScoringError> {
        answers.validate()?;
        Ok(self.compute(answers))
    }

    pub fn band(&self, score: i32) -> ScoreBand {
        self.config.bands.band(score)
    }
}

/// Scores with the standard rubric.
pub fn compute_score(answers: &Answers) -> ScoreResult {
    ScoringEngine::standard().compute(answers)
}

/// Headline score with verdict, subscores, and templated observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u8,
    pub verdict: Verdict,
    pub subscores: Subscores,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub next_steps: Vec<String>,
}

impl ScoreResult {
    pub fn band(&self) -> ScoreBand {
        self.verdict.band()
    }

    pub fn chip(&self) -> ScoreChip {
        ScoreChip {
            score: self.score,
            band: self.band(),
        }
    }
}

/// Audit trail for a headline score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub adjustments: Vec<Adjustment>,
    /// Base plus adjustments, before clamping.
    pub total: i32,
    pub score: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("{field} must be between 1 and 5 (got {value})")]
    InvalidInput { field: AnswerField, value: u8 },
    #[error("invalid scoring rubric: {reason}")]
    InvalidRubric { reason: String },
}
