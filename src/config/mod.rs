use std::env;
use std::fmt;
use std::str::FromStr;

use crate::evaluator::analytics::AnalyticsConfig;
use crate::evaluator::scoring::{PolicyError, ScoringPolicy};

/// Distinguishes runtime behavior for different stages of the host application.
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

/// Top-level configuration: environment, logging and the scoring/analytics dials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringPolicy,
    pub analytics: AnalyticsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("PRISMA_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("PRISMA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ScoringPolicy::default();
        let scoring = ScoringPolicy {
            thriving_min: env_or("PRISMA_THRIVING_MIN", defaults.thriving_min)?,
            good_min: env_or("PRISMA_GOOD_MIN", defaults.good_min)?,
            neutral_min: env_or("PRISMA_NEUTRAL_MIN", defaults.neutral_min)?,
            draining_max: env_or("PRISMA_DRAINING_MAX", defaults.draining_max)?,
            toxic_threshold: env_or("PRISMA_TOXIC_THRESHOLD", defaults.toxic_threshold)?,
        };
        scoring.validate()?;

        let defaults = AnalyticsConfig::default();
        let analytics = AnalyticsConfig {
            important_weight: env_or("PRISMA_IMPORTANT_WEIGHT", defaults.important_weight)?,
            strong_rating: env_or("PRISMA_STRONG_RATING", defaults.strong_rating)?,
            min_providers: defaults.min_providers,
            systemic_min_share: env_or("PRISMA_SYSTEMIC_MIN_SHARE", defaults.systemic_min_share)?,
            ambivalence_threshold: env_or(
                "PRISMA_AMBIVALENCE_THRESHOLD",
                defaults.ambivalence_threshold,
            )?,
            top_n: env_or("PRISMA_TOP_N", defaults.top_n)?,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring,
            analytics,
        })
    }
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InvalidPolicy(PolicyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be numeric (found '{value}')")
            }
            ConfigError::InvalidPolicy(err) => write!(f, "invalid scoring policy: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidPolicy(err) => Some(err),
        }
    }
}

impl From<PolicyError> for ConfigError {
    fn from(value: PolicyError) -> Self {
        Self::InvalidPolicy(value)
    }
}
