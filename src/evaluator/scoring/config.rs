use serde::{Deserialize, Serialize};

/// Band edges and the toxic override threshold used to classify a score.
///
/// Percent edges are inclusive lower bounds except `draining_max`: a score at or
/// below it is draining, anything above it (and below `neutral_min`) is
/// negligible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub thriving_min: f64,
    pub good_min: f64,
    pub neutral_min: f64,
    pub draining_max: f64,
    /// Harm totals at or below this value force the toxic category.
    pub toxic_threshold: i32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            thriving_min: 60.0,
            good_min: 30.0,
            neutral_min: 5.0,
            draining_max: -5.0,
            toxic_threshold: -35,
        }
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        let edges = [
            ("thriving_min", self.thriving_min),
            ("good_min", self.good_min),
            ("neutral_min", self.neutral_min),
            ("draining_max", self.draining_max),
        ];

        if let Some(&(name, _)) = edges.iter().find(|(_, value)| !value.is_finite()) {
            return Err(PolicyError::NonFinite(name));
        }

        for pair in edges.windows(2) {
            let (upper, upper_value) = pair[0];
            let (lower, lower_value) = pair[1];
            if upper_value <= lower_value {
                return Err(PolicyError::BandsNotDescending { upper, lower });
            }
        }

        if self.thriving_min > 100.0 || self.draining_max < -100.0 {
            return Err(PolicyError::OutOfRange);
        }

        if self.toxic_threshold >= 0 {
            return Err(PolicyError::NonNegativeToxicThreshold(self.toxic_threshold));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("{upper} must be greater than {lower}")]
    BandsNotDescending {
        upper: &'static str,
        lower: &'static str,
    },
    #[error("band edges must lie within [-100, 100]")]
    OutOfRange,
    #[error("toxic threshold must be negative (found {0})")]
    NonNegativeToxicThreshold(i32),
}
