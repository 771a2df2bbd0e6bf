use super::config::ScoringPolicy;
use super::rules::ScoreSignals;
use serde::{Deserialize, Serialize};

/// Outcome category, ordered from most alarming to most draining band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Disqualified,
    Toxic,
    Thriving,
    Good,
    Neutral,
    Negligible,
    Draining,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Disqualified => "No-Go",
            Category::Toxic => "Toxic",
            Category::Thriving => "Thriving",
            Category::Good => "Good",
            Category::Neutral => "Neutral",
            Category::Negligible => "Negligible",
            Category::Draining => "Draining",
        }
    }

    /// Display color hint for rendering code.
    pub const fn tone(self) -> &'static str {
        match self {
            Category::Disqualified => "red",
            Category::Toxic => "rose",
            Category::Thriving => "green",
            Category::Good => "emerald",
            Category::Neutral => "indigo",
            Category::Negligible => "slate",
            Category::Draining => "orange",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Category::Disqualified => "alert-octagon",
            Category::Toxic => "skull",
            Category::Thriving => "heart-handshake",
            Category::Good => "smile",
            Category::Neutral | Category::Negligible => "meh",
            Category::Draining => "frown",
        }
    }

    pub const fn is_charging(self) -> bool {
        matches!(self, Category::Thriving | Category::Good)
    }

    pub const fn is_draining(self) -> bool {
        matches!(
            self,
            Category::Disqualified | Category::Toxic | Category::Draining
        )
    }
}

impl ScoringPolicy {
    /// Percentage band, ignoring the disqualifier and toxic overrides.
    pub fn band_for(&self, percentage: f64) -> Category {
        let ladder = [
            (Category::Thriving, percentage >= self.thriving_min),
            (Category::Good, percentage >= self.good_min),
            (Category::Neutral, percentage >= self.neutral_min),
            (Category::Negligible, percentage > self.draining_max),
        ];

        ladder
            .into_iter()
            .find_map(|(category, hit)| hit.then_some(category))
            .unwrap_or(Category::Draining)
    }
}

pub(crate) fn decide_category(
    signals: &ScoreSignals,
    policy: &ScoringPolicy,
    percentage: f64,
) -> Category {
    let overrides = [
        (Category::Disqualified, signals.disqualified_by.is_some()),
        (Category::Toxic, signals.harm <= policy.toxic_threshold),
    ];

    overrides
        .into_iter()
        .find_map(|(category, hit)| hit.then_some(category))
        .unwrap_or_else(|| policy.band_for(percentage))
}
