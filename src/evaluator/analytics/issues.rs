use super::super::domain::{Friend, ImpactLevel, Trait, MAX_RATING};
use super::views::SystemicIssueEntry;
use super::AnalyticsConfig;

/// Harm a triggered disqualifier counts for when ranking intensity.
const DISQUALIFIER_HARM: i32 = ImpactLevel::Essential.weight() * MAX_RATING;

/// Important traits that show up negatively across a large share of the population.
pub fn detect_systemic_issues(
    friends: &[&Friend],
    traits: &[Trait],
    config: &AnalyticsConfig,
) -> Vec<SystemicIssueEntry> {
    if friends.is_empty() {
        return Vec::new();
    }

    let population = friends.len() as f64;

    let mut issues: Vec<SystemicIssueEntry> = traits
        .iter()
        .filter(|item| item.is_no_go || item.effective_weight() >= config.important_weight)
        .filter_map(|item| {
            let harms: Vec<i32> = friends
                .iter()
                .filter_map(|friend| {
                    if item.is_no_go {
                        friend.is_flagged(&item.id).then_some(DISQUALIFIER_HARM)
                    } else {
                        friend
                            .score_for(&item.id)
                            .filter(|rating| *rating < 0)
                            .map(|rating| (rating * item.effective_weight()).abs())
                    }
                })
                .collect();

            let affected = harms.len();
            let share = affected as f64 / population;
            if affected == 0 || share < config.systemic_min_share {
                return None;
            }

            Some(SystemicIssueEntry {
                trait_id: item.id.clone(),
                trait_name: item.name.clone(),
                affected,
                share,
                intensity: harms.iter().sum(),
            })
        })
        .collect();

    issues.sort_by(|a, b| {
        b.share
            .total_cmp(&a.share)
            .then_with(|| b.intensity.cmp(&a.intensity))
    });
    issues.truncate(config.top_n);
    issues
}
