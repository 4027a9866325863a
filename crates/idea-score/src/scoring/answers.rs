use super::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// Pricing leverage is not asked by every form; absent answers score as neutral.
pub const DEFAULT_PRICING_LEVERAGE: u8 = 3;

/// Rated dimensions of an idea evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerField {
    ProblemSeverity,
    AudienceClarity,
    WillingnessToPay,
    PricingLeverage,
    CompetitionDensity,
    DifferentiationClarity,
    Reachability,
    OrganicPotential,
    MvpFeasibility,
    RecurringUse,
}

impl AnswerField {
    pub const ALL: [AnswerField; 10] = [
        AnswerField::ProblemSeverity,
        AnswerField::AudienceClarity,
        AnswerField::WillingnessToPay,
        AnswerField::PricingLeverage,
        AnswerField::CompetitionDensity,
        AnswerField::DifferentiationClarity,
        AnswerField::Reachability,
        AnswerField::OrganicPotential,
        AnswerField::MvpFeasibility,
        AnswerField::RecurringUse,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AnswerField::ProblemSeverity => "problemSeverity",
            AnswerField::AudienceClarity => "audienceClarity",
            AnswerField::WillingnessToPay => "willingnessToPay",
            AnswerField::PricingLeverage => "pricingLeverage",
            AnswerField::CompetitionDensity => "competitionDensity",
            AnswerField::DifferentiationClarity => "differentiationClarity",
            AnswerField::Reachability => "reachability",
            AnswerField::OrganicPotential => "organicPotential",
            AnswerField::MvpFeasibility => "mvpFeasibility",
            AnswerField::RecurringUse => "recurringUse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnswerField::ProblemSeverity => "Problem severity",
            AnswerField::AudienceClarity => "Audience clarity",
            AnswerField::WillingnessToPay => "Willingness to pay",
            AnswerField::PricingLeverage => "Pricing leverage",
            AnswerField::CompetitionDensity => "Competition density",
            AnswerField::DifferentiationClarity => "Differentiation clarity",
            AnswerField::Reachability => "Reachability",
            AnswerField::OrganicPotential => "Organic potential",
            AnswerField::MvpFeasibility => "MVP feasibility",
            AnswerField::RecurringUse => "Recurring use",
        }
    }

    /// A crowded niche (5) is unfavourable, so its contribution runs backwards.
    pub fn is_inverted(self) -> bool {
        matches!(self, AnswerField::CompetitionDensity)
    }

    pub fn is_optional(self) -> bool {
        matches!(self, AnswerField::PricingLeverage)
    }
}

impl fmt::Display for AnswerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Self-assessed ratings for a single idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    pub problem_severity: u8,
    pub audience_clarity: u8,
    pub willingness_to_pay: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_leverage: Option<u8>,
    pub competition_density: u8,
    pub differentiation_clarity: u8,
    pub reachability: u8,
    pub organic_potential: u8,
    pub mvp_feasibility: u8,
    pub recurring_use: u8,
    #[serde(default)]
    pub icp_specific: bool,
}

impl Answers {
    /// Every required rating set to `value`, optional fields absent.
    pub fn uniform(value: u8) -> Self {
        Self {
            problem_severity: value,
            audience_clarity: value,
            willingness_to_pay: value,
            pricing_leverage: None,
            competition_density: value,
            differentiation_clarity: value,
            reachability: value,
            organic_potential: value,
            mvp_feasibility: value,
            recurring_use: value,
            icp_specific: false,
        }
    }

    /// Raw rating as entered, with pricing leverage defaulted.
    pub fn rating(&self, field: AnswerField) -> i32 {
        let value = match field {
            AnswerField::ProblemSeverity => self.problem_severity,
            AnswerField::AudienceClarity => self.audience_clarity,
            AnswerField::WillingnessToPay => self.willingness_to_pay,
            AnswerField::PricingLeverage => {
                self.pricing_leverage.unwrap_or(DEFAULT_PRICING_LEVERAGE)
            }
            AnswerField::CompetitionDensity => self.competition_density,
            AnswerField::DifferentiationClarity => self.differentiation_clarity,
            AnswerField::Reachability => self.reachability,
            AnswerField::OrganicPotential => self.organic_potential,
            AnswerField::MvpFeasibility => self.mvp_feasibility,
            AnswerField::RecurringUse => self.recurring_use,
        };
        i32::from(value)
    }

    /// Rating oriented so that higher is always more favourable.
    pub fn oriented(&self, field: AnswerField) -> i32 {
        let raw = self.rating(field);
        if field.is_inverted() {
            i32::from(RATING_MIN + RATING_MAX) - raw
        } else {
            raw
        }
    }

    pub fn set(&mut self, field: AnswerField, value: u8) {
        match field {
            AnswerField::ProblemSeverity => self.problem_severity = value,
            AnswerField::AudienceClarity => self.audience_clarity = value,
            AnswerField::WillingnessToPay => self.willingness_to_pay = value,
            AnswerField::PricingLeverage => self.pricing_leverage = Some(value),
            AnswerField::CompetitionDensity => self.competition_density = value,
            AnswerField::DifferentiationClarity => self.differentiation_clarity = value,
            AnswerField::Reachability => self.reachability = value,
            AnswerField::OrganicPotential => self.organic_potential = value,
            AnswerField::MvpFeasibility => self.mvp_feasibility = value,
            AnswerField::RecurringUse => self.recurring_use = value,
        }
    }

    /// Fields whose rating lies outside `RATING_MIN..=RATING_MAX`.
    pub fn out_of_range(&self) -> Vec<(AnswerField, u8)> {
        AnswerField::ALL
            .iter()
            .filter(|field| !(field.is_optional() && self.pricing_leverage.is_none()))
            .map(|field| (*field, self.rating(*field)))
            .filter(|(_, value)| !is_valid_rating(*value))
            .map(|(field, value)| (field, u8::try_from(value).unwrap_or(u8::MAX)))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        match self.out_of_range().first() {
            Some((field, value)) => Err(ScoringError::InvalidInput {
                field: *field,
                value: *value,
            }),
            None => Ok(()),
        }
    }
}

pub(crate) fn is_valid_rating(value: i32) -> bool {
    (i32::from(RATING_MIN)..=i32::from(RATING_MAX)).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_leverage_defaults_to_neutral() {
        let answers = Answers::uniform(5);
        assert_eq!(answers.rating(AnswerField::PricingLeverage), 3);
    }

    #[test]
    fn competition_density_is_inverted() {
        let mut answers = Answers::uniform(3);
        answers.competition_density = 5;
        assert_eq!(answers.rating(AnswerField::CompetitionDensity), 5);
        assert_eq!(answers.oriented(AnswerField::CompetitionDensity), 1);
    }

    #[test]
    fn validate_reports_first_out_of_range_field() {
        let mut answers = Answers::uniform(3);
        answers.reachability = 0;
        answers.recurring_use = 9;

        match answers.validate() {
            Err(ScoringError::InvalidInput { field, value }) => {
                assert_eq!(field, AnswerField::Reachability);
                assert_eq!(value, 0);
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
        assert_eq!(answers.out_of_range().len(), 2);
    }

    #[test]
    fn absent_pricing_leverage_is_not_validated() {
        let answers = Answers::uniform(1);
        assert!(answers.validate().is_ok());
    }

    #[test]
    fn deserializes_camel_case_with_optional_fields_missing() {
        let answers: Answers = serde_json::from_str(
            r#"{
                "problemSeverity": 4, "audienceClarity": 3, "willingnessToPay": 2,
                "competitionDensity": 5, "differentiationClarity": 3, "reachability": 4,
                "organicPotential": 1, "mvpFeasibility": 5, "recurringUse": 2
            }"#,
        )
        .expect("answers parse");

        assert_eq!(answers.problem_severity, 4);
        assert_eq!(answers.pricing_leverage, None);
        assert!(!answers.icp_specific);
    }
}
