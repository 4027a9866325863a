use idea_score::config::{load_rubric, AppConfig};
use idea_score::error::AppError;
use idea_score::questionnaire::IdeaSubmission;
use idea_score::scoring::{Answers, ScoringConfig, RATING_MAX, RATING_MIN};
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn parse_rating(raw: &str) -> Result<u8, String> {
    let value: u8 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a rating ({err})"))?;
    if (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "rating must be between {RATING_MIN} and {RATING_MAX} (got {value})"
        ))
    }
}

pub(crate) fn resolve_rubric(
    config: &AppConfig,
    override_path: Option<PathBuf>,
) -> Result<ScoringConfig, AppError> {
    let rubric = match override_path {
        Some(path) => load_rubric(path)?,
        None => config.scoring_config()?,
    };
    Ok(rubric)
}

/// Accepts either a full submission or a bare answers object.
pub(crate) fn load_submission(path: &Path) -> Result<IdeaSubmission, AppError> {
    let raw = fs::read_to_string(path)?;
    parse_submission(&raw)
}

pub(crate) fn parse_submission(raw: &str) -> Result<IdeaSubmission, AppError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.get("idea").is_some() {
        return Ok(serde_json::from_value(value)?);
    }
    let answers: Answers = serde_json::from_value(value)?;
    Ok(IdeaSubmission {
        idea: String::new(),
        answers,
    })
}
