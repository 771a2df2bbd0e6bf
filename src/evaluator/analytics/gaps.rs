use super::super::domain::{Friend, Trait};
use super::views::{GapEntry, GapSeverity, ProviderView};
use super::AnalyticsConfig;

/// Important values covered by fewer than `min_providers` strong ratings.
pub fn detect_gaps(friends: &[&Friend], traits: &[Trait], config: &AnalyticsConfig) -> Vec<GapEntry> {
    if friends.is_empty() {
        return Vec::new();
    }

    let mut gaps: Vec<GapEntry> = traits
        .iter()
        .filter(|item| {
            item.is_weighted() && item.effective_weight() >= config.important_weight
        })
        .filter_map(|item| {
            let providers: Vec<&Friend> = friends
                .iter()
                .copied()
                .filter(|friend| {
                    friend
                        .score_for(&item.id)
                        .is_some_and(|rating| rating >= config.strong_rating)
                })
                .collect();

            if providers.len() >= config.min_providers {
                return None;
            }

            let severity = if providers.is_empty() {
                GapSeverity::Empty
            } else {
                GapSeverity::Scarce
            };

            let sole_provider = match providers.as_slice() {
                [only] => Some(ProviderView {
                    friend_id: only.id.clone(),
                    name: only.name.clone(),
                }),
                _ => None,
            };

            Some(GapEntry {
                trait_id: item.id.clone(),
                trait_name: item.name.clone(),
                providers: providers.len(),
                severity,
                severity_label: severity.label(),
                sole_provider,
            })
        })
        .collect();

    gaps.sort_by_key(|gap| gap.providers);
    gaps.truncate(config.top_n);
    gaps
}
