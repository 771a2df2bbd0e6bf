mod config;
mod policy;
mod rules;

pub use config::{PolicyError, ScoringPolicy};
pub use policy::Category;

use super::domain::{Friend, FriendId, Trait, TraitId};
use policy::decide_category;
use serde::Serialize;
use tracing::trace;

/// Stateless evaluator applying a scoring policy to one friend at a time.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn evaluate(&self, friend: &Friend, traits: &[Trait]) -> ScoreResult {
        let (contributions, signals) = rules::score_ratings(friend, traits);

        let (score, category) = if signals.disqualified_by.is_some() {
            (None, decide_category(&signals, &self.policy, 0.0))
        } else {
            let percentage = signals.percentage();
            (
                Some(percentage),
                decide_category(&signals, &self.policy, percentage),
            )
        };

        let display_percentage = match score {
            Some(percentage) => percentage.clamp(0.0, 100.0).round() as u8,
            None => 100,
        };

        trace!(friend = %friend.id, ?category, ?score, harm = signals.harm, "evaluated friend");

        ScoreResult {
            friend_id: friend.id.clone(),
            category,
            label: category.label(),
            tone: category.tone(),
            icon: category.icon(),
            score,
            display_percentage,
            disqualified_by: signals.disqualified_by,
            harm: signals.harm,
            contributions,
        }
    }
}

/// Weight × rating product of one rated trait, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitContribution {
    pub trait_id: TraitId,
    pub weight: i32,
    pub rating: i32,
    /// Amount that entered the score.
    pub impact: i32,
}

/// Evaluation output consumed by rendering code and the analytics reducers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub friend_id: FriendId,
    pub category: Category,
    pub label: &'static str,
    pub tone: &'static str,
    pub icon: &'static str,
    /// Share of the attainable positive maximum, in percent; absent for disqualified friends.
    pub score: Option<f64>,
    /// Bar fill in `[0, 100]`.
    pub display_percentage: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disqualified_by: Option<TraitId>,
    pub harm: i32,
    pub contributions: Vec<TraitContribution>,
}

impl ScoreResult {
    pub fn is_disqualified(&self) -> bool {
        self.category == Category::Disqualified
    }
}
