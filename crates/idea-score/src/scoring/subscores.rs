use super::answers::{AnswerField, Answers};
use super::verdict::clamp_score;
use serde::{Deserialize, Serialize};

/// Independent 0-100 diagnostic views; they ignore bonuses and penalties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscores {
    pub market: u8,
    pub monetization: u8,
    pub competition_moat: u8,
    pub distribution: u8,
    pub feasibility: u8,
    pub retention: u8,
}

impl Subscores {
    pub fn from_answers(answers: &Answers) -> Self {
        let pair = |a: AnswerField, b: AnswerField| {
            clamp_score((answers.oriented(a) + answers.oriented(b)) * 10)
        };
        let single = |field: AnswerField| clamp_score(answers.oriented(field) * 20);

        Self {
            market: pair(AnswerField::ProblemSeverity, AnswerField::AudienceClarity),
            monetization: pair(AnswerField::WillingnessToPay, AnswerField::PricingLeverage),
            competition_moat: pair(
                AnswerField::CompetitionDensity,
                AnswerField::DifferentiationClarity,
            ),
            distribution: pair(AnswerField::Reachability, AnswerField::OrganicPotential),
            feasibility: single(AnswerField::MvpFeasibility),
            retention: single(AnswerField::RecurringUse),
        }
    }

    /// Labelled entries in dashboard order.
    pub fn entries(&self) -> [(&'static str, u8); 6] {
        [
            ("Market fit", self.market),
            ("Monetization", self.monetization),
            ("Competition moat", self.competition_moat),
            ("Distribution", self.distribution),
            ("Build feasibility", self.feasibility),
            ("User retention", self.retention),
        ]
    }
}
