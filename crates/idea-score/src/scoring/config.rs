use super::answers::{is_valid_rating, AnswerField};
use super::insights::{InsightCatalog, NextStepTier};
use super::rules::{AdjustmentRule, Condition, InsightRule};
use super::verdict::BandThresholds;
use super::ScoringError;
use serde::{Deserialize, Serialize};

pub const MAX_WEIGHT: i32 = 100;
pub const MAX_ADJUSTMENT_POINTS: i32 = 100;

/// Rubric configuration: weights, adjustment rules, bands, and insight templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub bonuses: Vec<AdjustmentRule>,
    pub penalties: Vec<AdjustmentRule>,
    #[serde(default)]
    pub bands: BandThresholds,
    pub insights: InsightCatalog,
}

/// Integer multiplier applied to each oriented rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub problem_severity: i32,
    pub audience_clarity: i32,
    pub willingness_to_pay: i32,
    pub pricing_leverage: i32,
    pub competition_density: i32,
    pub differentiation_clarity: i32,
    pub reachability: i32,
    pub organic_potential: i32,
    pub mvp_feasibility: i32,
    pub recurring_use: i32,
}

impl Weights {
    pub fn get(&self, field: AnswerField) -> i32 {
        match field {
            AnswerField::ProblemSeverity => self.problem_severity,
            AnswerField::AudienceClarity => self.audience_clarity,
            AnswerField::WillingnessToPay => self.willingness_to_pay,
            AnswerField::PricingLeverage => self.pricing_leverage,
            AnswerField::CompetitionDensity => self.competition_density,
            AnswerField::DifferentiationClarity => self.differentiation_clarity,
            AnswerField::Reachability => self.reachability,
            AnswerField::OrganicPotential => self.organic_potential,
            AnswerField::MvpFeasibility => self.mvp_feasibility,
            AnswerField::RecurringUse => self.recurring_use,
        }
    }

    pub fn total(&self) -> i32 {
        AnswerField::ALL.iter().map(|field| self.get(*field)).sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            problem_severity: 4,
            audience_clarity: 2,
            willingness_to_pay: 3,
            pricing_leverage: 1,
            competition_density: 2,
            differentiation_clarity: 1,
            reachability: 2,
            organic_potential: 1,
            mvp_feasibility: 2,
            recurring_use: 2,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringConfig {
    /// Standard rubric: weights sum to 20 so an all-favourable idea bases at 100.
    pub fn standard() -> Self {
        use AnswerField::*;

        Self {
            weights: Weights::default(),
            bonuses: vec![
                AdjustmentRule::new(
                    "icp_reachable",
                    vec![Condition::IcpSpecific, Condition::at_least(Reachability, 4)],
                    5,
                ),
                AdjustmentRule::new(
                    "differentiated_open_niche",
                    vec![
                        Condition::at_least(DifferentiationClarity, 4),
                        Condition::at_most(CompetitionDensity, 3),
                    ],
                    3,
                ),
                AdjustmentRule::new(
                    "fast_sticky_mvp",
                    vec![
                        Condition::at_least(MvpFeasibility, 4),
                        Condition::at_least(RecurringUse, 4),
                    ],
                    2,
                ),
            ],
            penalties: vec![
                AdjustmentRule::new(
                    "crowded_undifferentiated",
                    vec![
                        Condition::equals(CompetitionDensity, 5),
                        Condition::at_most(DifferentiationClarity, 3),
                    ],
                    -5,
                ),
                AdjustmentRule::new(
                    "low_willingness_to_pay",
                    vec![Condition::at_most(WillingnessToPay, 2)],
                    -4,
                ),
                AdjustmentRule::new(
                    "hard_to_reach",
                    vec![Condition::at_most(Reachability, 2)],
                    -3,
                ),
                AdjustmentRule::new(
                    "low_recurring_use",
                    vec![Condition::at_most(RecurringUse, 2)],
                    -3,
                ),
            ],
            bands: BandThresholds::default(),
            insights: standard_insights(),
        }
    }

    pub fn adjustments(&self) -> impl Iterator<Item = &AdjustmentRule> {
        self.bonuses.iter().chain(self.penalties.iter())
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if !self.bands.is_well_formed() {
            return Err(invalid(format!(
                "band thresholds must descend within 0..=100 (strong {}, promising {}, risky {})",
                self.bands.strong, self.bands.promising, self.bands.risky
            )));
        }

        if let Some(field) = AnswerField::ALL
            .iter()
            .find(|field| !(0..=MAX_WEIGHT).contains(&self.weights.get(**field)))
        {
            return Err(invalid(format!(
                "weight for {field} must lie within 0..={MAX_WEIGHT} (got {})",
                self.weights.get(*field)
            )));
        }

        if let Some(rule) = self
            .adjustments()
            .find(|rule| rule.points.unsigned_abs() > MAX_ADJUSTMENT_POINTS.unsigned_abs())
        {
            return Err(invalid(format!(
                "adjustment '{}' must stay within ±{MAX_ADJUSTMENT_POINTS} points (got {})",
                rule.key, rule.points
            )));
        }

        if let Some(rule) = self.bonuses.iter().find(|rule| rule.points < 0) {
            return Err(invalid(format!("bonus '{}' must add points", rule.key)));
        }

        if let Some(rule) = self.penalties.iter().find(|rule| rule.points > 0) {
            return Err(invalid(format!("penalty '{}' must deduct points", rule.key)));
        }

        let conditions = self
            .adjustments()
            .flat_map(|rule| rule.conditions.iter())
            .chain(self.insights.conditions());
        for condition in conditions {
            if let Some((field, value)) = condition.threshold() {
                if !is_valid_rating(i32::from(value)) {
                    return Err(invalid(format!(
                        "rule threshold {value} for {field} lies outside 1..=5"
                    )));
                }
            }
        }

        let tiers = &self.insights.next_steps;
        if tiers.windows(2).any(|pair| pair[0].min_score <= pair[1].min_score) {
            return Err(invalid(
                "next-step tiers must be ordered by descending min_score".to_string(),
            ));
        }
        if tiers.last().map(|tier| tier.min_score) != Some(0) {
            return Err(invalid(
                "next-step tiers must include a tier starting at score 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> ScoringError {
    ScoringError::InvalidRubric { reason }
}

fn standard_insights() -> InsightCatalog {
    use AnswerField::*;

    let strengths = vec![
        InsightRule::when(
            Condition::at_least(ProblemSeverity, 4),
            "Solves a painful, high-priority problem for its customers",
        ),
        InsightRule::when(
            Condition::at_least(WillingnessToPay, 4),
            "Buyers already pay for alternatives, so willingness to pay is proven",
        ),
        InsightRule::when(
            Condition::at_least(AudienceClarity, 4),
            "Well-defined target audience makes positioning and outreach easier",
        ),
        InsightRule::when(
            Condition::at_least(DifferentiationClarity, 4),
            "Clear differentiation from the leading tools",
        ),
        InsightRule::when(
            Condition::at_least(MvpFeasibility, 4),
            "MVP can ship quickly, so real user feedback arrives early",
        ),
        InsightRule::when(
            Condition::at_least(Reachability, 4),
            "Ideal customers are reachable through proven channels",
        ),
        InsightRule::when(
            Condition::at_least(OrganicPotential, 4),
            "Strong potential for organic growth through SEO, communities, or word of mouth",
        ),
        InsightRule::when(
            Condition::at_least(RecurringUse, 4),
            "Frequent usage supports retention and recurring revenue",
        ),
    ];

    let risks = vec![
        InsightRule::when(
            Condition::at_most(ProblemSeverity, 2),
            "The problem may not be painful enough for customers to prioritize a fix",
        ),
        InsightRule::when(
            Condition::at_most(WillingnessToPay, 2),
            "Customers may be reluctant to pay for this solution",
        ),
        InsightRule::when(
            Condition::at_most(DifferentiationClarity, 2),
            "Differentiation from existing tools is unclear",
        ),
        InsightRule::when(
            Condition::at_most(MvpFeasibility, 2),
            "A long MVP build delays validation and burns runway",
        ),
        InsightRule::when(
            Condition::at_most(Reachability, 2),
            "Reaching ideal customers may be slow or expensive",
        ),
        InsightRule::when(
            Condition::at_most(RecurringUse, 2),
            "Infrequent usage puts retention and subscription revenue at risk",
        ),
        InsightRule::when(
            Condition::at_least(CompetitionDensity, 4),
            "Crowded niche with strong incumbents competing for the same customers",
        ),
    ];

    let next_steps = vec![
        NextStepTier {
            min_score: 70,
            steps: vec![
                InsightRule::always(
                    "Build and test your MVP with a small group of target customers",
                ),
                InsightRule::always("Validate pricing with pre-sales or a paid pilot"),
                InsightRule::always(
                    "Plan your go-to-market around your strongest acquisition channel",
                ),
            ],
        },
        NextStepTier {
            min_score: 50,
            steps: vec![
                InsightRule::when(
                    Condition::at_most(AudienceClarity, 3),
                    "Clarify your target audience through customer interviews",
                ),
                InsightRule::when(
                    Condition::at_most(ProblemSeverity, 3),
                    "Validate that the problem is painful enough to pay for",
                ),
                InsightRule::when(
                    Condition::at_most(WillingnessToPay, 3),
                    "Research what customers currently pay for alternatives",
                ),
                InsightRule::always("Address key weaknesses before investing heavily in development"),
            ],
        },
        NextStepTier {
            min_score: 0,
            steps: vec![
                InsightRule::always("Consider pivoting or significantly refining the core idea"),
                InsightRule::when(
                    Condition::at_most(ProblemSeverity, 2),
                    "Find a more critical problem that customers urgently need solved",
                ),
                InsightRule::when(
                    Condition::at_most(AudienceClarity, 2),
                    "Narrow down to a specific customer segment with a clear need",
                ),
                InsightRule::always("Conduct extensive market research before building anything"),
            ],
        },
    ];

    InsightCatalog {
        strengths,
        risks,
        next_steps,
    }
}
