use super::super::domain::{Friend, Trait, TraitId, MAX_RATING};
use super::TraitContribution;

/// Accumulators gathered in a single pass over the trait registry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ScoreSignals {
    pub disqualified_by: Option<TraitId>,
    pub current: i32,
    pub max_potential: i32,
    pub harm: i32,
}

impl ScoreSignals {
    /// `current` relative to the attainable positive maximum, 0 when nothing
    /// positive can be earned.
    pub fn percentage(&self) -> f64 {
        if self.max_potential <= 0 {
            return 0.0;
        }

        (self.current as f64 / self.max_potential as f64) * 100.0
    }
}

pub(crate) fn score_ratings(
    friend: &Friend,
    traits: &[Trait],
) -> (Vec<TraitContribution>, ScoreSignals) {
    let mut contributions = Vec::new();
    let mut signals = ScoreSignals::default();

    for item in traits {
        if item.is_no_go {
            if signals.disqualified_by.is_none() && friend.is_flagged(&item.id) {
                signals.disqualified_by = Some(item.id.clone());
            }
            continue;
        }

        let weight = item.effective_weight();
        if weight > 0 {
            signals.max_potential += weight * MAX_RATING;
        }

        let Some(rating) = friend.score_for(&item.id) else {
            continue;
        };

        let product = weight * rating;
        signals.current += product;
        if product < 0 {
            signals.harm += product;
        }

        contributions.push(TraitContribution {
            trait_id: item.id.clone(),
            weight,
            rating,
            impact: product,
        });
    }

    (contributions, signals)
}
