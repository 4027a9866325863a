//! Scoring engine for SaaS idea evaluations.
//!
//! The crate turns nine 1-5 self-assessment ratings into a weighted 0-100
//! score, a verdict, per-category subscores, and templated insights. The
//! rubric is injected through [`scoring::ScoringConfig`] so rule variants can
//! be exercised in isolation.

pub mod config;
pub mod error;
pub mod payload;
pub mod questionnaire;
pub mod scoring;
pub mod telemetry;

pub use scoring::{
    band_label, compute_score, get_band, verdict_for, Answers, ScoreBand, ScoreResult,
    ScoringConfig, ScoringEngine, Subscores, Verdict,
};
