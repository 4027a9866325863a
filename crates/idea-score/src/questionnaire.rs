//! Question catalog and submission validation for the evaluation wizard.

use crate::scoring::{AnswerField, Answers};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const IDEA_MIN_CHARS: usize = 10;

/// Screens of the evaluation wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Idea,
    MarketDemand,
    CompetitionFeasibility,
    AudienceRetention,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Idea,
        WizardStep::MarketDemand,
        WizardStep::CompetitionFeasibility,
        WizardStep::AudienceRetention,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Idea => "Your idea",
            WizardStep::MarketDemand => "Market & demand",
            WizardStep::CompetitionFeasibility => "Competition & feasibility",
            WizardStep::AudienceRetention => "Audience & retention",
        }
    }

    pub fn fields(self) -> &'static [AnswerField] {
        match self {
            WizardStep::Idea => &[],
            WizardStep::MarketDemand => &[
                AnswerField::ProblemSeverity,
                AnswerField::WillingnessToPay,
                AnswerField::Reachability,
            ],
            WizardStep::CompetitionFeasibility => &[
                AnswerField::CompetitionDensity,
                AnswerField::DifferentiationClarity,
                AnswerField::MvpFeasibility,
            ],
            WizardStep::AudienceRetention => &[
                AnswerField::AudienceClarity,
                AnswerField::OrganicPotential,
                AnswerField::RecurringUse,
            ],
        }
    }

    pub fn index(self) -> usize {
        match self {
            WizardStep::Idea => 0,
            WizardStep::MarketDemand => 1,
            WizardStep::CompetitionFeasibility => 2,
            WizardStep::AudienceRetention => 3,
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<WizardStep> {
        self.index()
            .checked_sub(1)
            .and_then(|index| WizardStep::ALL.get(index).copied())
    }
}

pub fn progress_percent(step: WizardStep) -> u8 {
    let steps = WizardStep::ALL.len();
    let percent = ((step.index() + 1) * 100 + steps / 2) / steps;
    u8::try_from(percent).unwrap_or(100)
}

/// Prompt shown for a rated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub field: AnswerField,
    pub prompt: &'static str,
    pub helper: &'static str,
}

pub fn question(field: AnswerField) -> Question {
    let (prompt, helper) = match field {
        AnswerField::ProblemSeverity => (
            "How painful is the problem you solve?",
            "1 = not painful · 5 = mission-critical",
        ),
        AnswerField::WillingnessToPay => (
            "Do buyers already pay for alternatives?",
            "1 = rarely · 5 = commonly/clearly",
        ),
        AnswerField::Reachability => (
            "How easy is it to reach your ideal customer?",
            "1 = hard/expensive · 5 = many proven channels",
        ),
        AnswerField::CompetitionDensity => (
            "How crowded is your exact niche?",
            "1 = few/none · 5 = many strong incumbents",
        ),
        AnswerField::DifferentiationClarity => (
            "How clear is your differentiation vs. top tools?",
            "1 = unclear · 5 = very clear with proof",
        ),
        AnswerField::MvpFeasibility => (
            "How fast can you ship an MVP?",
            "1 = >12 weeks · 5 = <2 weeks",
        ),
        AnswerField::AudienceClarity => (
            "How clearly defined is your ideal customer profile?",
            "1 = vague · 5 = very specific ICP",
        ),
        AnswerField::OrganicPotential => (
            "Organic potential (SEO / communities / virality)",
            "1 = low · 5 = high",
        ),
        AnswerField::RecurringUse => (
            "Expected usage frequency",
            "1 = ad-hoc · 5 = daily/weekly",
        ),
        AnswerField::PricingLeverage => (
            "How much pricing power do you have?",
            "1 = commodity pricing · 5 = premium pricing (optional)",
        ),
    };

    Question {
        field,
        prompt,
        helper,
    }
}

pub fn questions(step: WizardStep) -> Vec<Question> {
    step.fields().iter().map(|field| question(*field)).collect()
}

/// Idea description plus ratings as collected by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSubmission {
    #[serde(default)]
    pub idea: String,
    #[serde(flatten)]
    pub answers: Answers,
}

impl IdeaSubmission {
    pub fn validate_step(&self, step: WizardStep) -> Result<(), SubmissionError> {
        let mut issues = Vec::new();
        if step == WizardStep::Idea {
            issues.extend(self.idea_issue());
        }
        issues.extend(rating_issues(&self.answers, step.fields()));
        SubmissionError::from_issues(issues)
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        let mut issues: Vec<ValidationIssue> = self.idea_issue().into_iter().collect();
        for step in WizardStep::ALL {
            issues.extend(rating_issues(&self.answers, step.fields()));
        }
        if self.answers.pricing_leverage.is_some() {
            issues.extend(rating_issues(
                &self.answers,
                &[AnswerField::PricingLeverage],
            ));
        }
        SubmissionError::from_issues(issues)
    }

    fn idea_issue(&self) -> Option<ValidationIssue> {
        if self.idea.trim().chars().count() < IDEA_MIN_CHARS {
            Some(ValidationIssue {
                field: "idea",
                message: "Give us 1–2 sentences about your idea.".to_string(),
            })
        } else {
            None
        }
    }
}

fn rating_issues(answers: &Answers, fields: &[AnswerField]) -> Vec<ValidationIssue> {
    let invalid = answers.out_of_range();
    fields
        .iter()
        .filter_map(|field| invalid.iter().find(|(bad, _)| bad == field))
        .map(|(field, value)| ValidationIssue {
            field: field.key(),
            message: format!("Choose a rating between 1 and 5 (got {value})."),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issues: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        f.write_str(&issues.join("; "))
    }
}

impl std::error::Error for SubmissionError {}

impl SubmissionError {
    fn from_issues(issues: Vec<ValidationIssue>) -> Result<(), Self> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self { issues })
        }
    }
}
