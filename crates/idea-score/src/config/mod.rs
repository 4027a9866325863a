use crate::scoring::ScoringConfig;
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringSettings,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let rubric_path = env::var("IDEA_SCORE_RUBRIC")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let base_url = env::var("IDEA_SCORE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl { value: base_url });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringSettings {
                rubric_path,
                base_url,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }

    /// The rubric the engine should run with.
    pub fn scoring_config(&self) -> Result<ScoringConfig, ConfigError> {
        self.scoring.rubric()
    }
}

/// Rubric source and result link settings.
#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub rubric_path: Option<PathBuf>,
    pub base_url: String,
}

impl ScoringSettings {
    /// Reads and validates the rubric file, or falls back to the standard rubric.
    pub fn rubric(&self) -> Result<ScoringConfig, ConfigError> {
        match &self.rubric_path {
            Some(path) => load_rubric(path.clone()),
            None => Ok(ScoringConfig::standard()),
        }
    }
}

pub fn load_rubric(path: PathBuf) -> Result<ScoringConfig, ConfigError> {
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(ConfigError::RubricUnreadable { path, source }),
    };
    let config: ScoringConfig = match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(source) => return Err(ConfigError::RubricMalformed { path, source }),
    };
    if let Err(source) = config.validate() {
        return Err(ConfigError::RubricRejected { path, source });
    }
    Ok(config)
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl {
        value: String,
    },
    RubricUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    RubricMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    RubricRejected {
        path: PathBuf,
        source: crate::scoring::ScoringError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { value } => write!(
                f,
                "IDEA_SCORE_BASE_URL must start with http:// or https:// (got '{}')",
                value
            ),
            ConfigError::RubricUnreadable { path, .. } => {
                write!(f, "unable to read rubric file {}", path.display())
            }
            ConfigError::RubricMalformed { path, .. } => {
                write!(f, "rubric file {} is not a valid rubric", path.display())
            }
            ConfigError::RubricRejected { path, source } => {
                write!(f, "rubric file {} rejected: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidBaseUrl { .. } => None,
            ConfigError::RubricUnreadable { source, .. } => Some(source),
            ConfigError::RubricMalformed { source, .. } => Some(source),
            ConfigError::RubricRejected { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("IDEA_SCORE_RUBRIC");
        env::remove_var("IDEA_SCORE_BASE_URL");
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("idea-score-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("scratch file written");
        path
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring.base_url, DEFAULT_BASE_URL);
        assert!(config.scoring.rubric_path.is_none());
        assert_eq!(
            config.scoring_config().expect("standard rubric"),
            ScoringConfig::standard()
        );
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("IDEA_SCORE_BASE_URL", "https://ideas.example.com/");
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.base_url, "https://ideas.example.com");
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("IDEA_SCORE_BASE_URL", "ideas.example.com");
        let err = AppConfig::load().expect_err("scheme required");
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
        reset_env();
    }

    #[test]
    fn loads_rubric_override_from_file() {
        let mut rubric = ScoringConfig::standard();
        rubric.bonuses.clear();
        let json = serde_json::to_string(&rubric).expect("rubric serializes");
        let path = scratch_file("rubric.json", &json);

        let loaded = load_rubric(path.clone()).expect("rubric loads");
        fs::remove_file(&path).ok();

        assert!(loaded.bonuses.is_empty());
        assert_eq!(loaded.penalties.len(), 4);
    }

    #[test]
    fn scoring_config_reads_rubric_named_by_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let mut rubric = ScoringConfig::standard();
        rubric.penalties.clear();
        let path = scratch_file(
            "env-rubric.json",
            &serde_json::to_string(&rubric).expect("rubric serializes"),
        );
        env::set_var("IDEA_SCORE_RUBRIC", &path);

        let config = AppConfig::load().expect("config loads");
        let loaded = config.scoring_config().expect("rubric loads");
        fs::remove_file(&path).ok();
        reset_env();

        assert_eq!(config.scoring.rubric_path.as_deref(), Some(path.as_path()));
        assert!(loaded.penalties.is_empty());
        assert_eq!(loaded.bonuses.len(), 3);
    }

    #[test]
    fn reports_malformed_and_invalid_rubrics() {
        let malformed = scratch_file("malformed.json", "{ not json");
        let err = load_rubric(malformed.clone()).expect_err("malformed rubric");
        fs::remove_file(&malformed).ok();
        assert!(matches!(err, ConfigError::RubricMalformed { .. }));

        let mut rubric = ScoringConfig::standard();
        rubric.bands.risky = 90;
        let invalid = scratch_file(
            "invalid.json",
            &serde_json::to_string(&rubric).expect("rubric serializes"),
        );
        let err = load_rubric(invalid.clone()).expect_err("invalid rubric");
        fs::remove_file(&invalid).ok();
        assert!(err.to_string().contains("rejected"));
    }
}
