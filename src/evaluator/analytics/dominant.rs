use super::super::domain::{Friend, Trait};
use super::views::DominantTraitEntry;
use super::AnalyticsConfig;

/// Weighted traits ranked by the positive intensity they bring into the network.
pub fn dominant_traits(
    friends: &[&Friend],
    traits: &[Trait],
    config: &AnalyticsConfig,
) -> Vec<DominantTraitEntry> {
    let mut entries: Vec<DominantTraitEntry> = traits
        .iter()
        .filter(|item| item.is_weighted())
        .map(|item| DominantTraitEntry {
            trait_id: item.id.clone(),
            trait_name: item.name.clone(),
            intensity: friends
                .iter()
                .filter_map(|friend| friend.score_for(&item.id))
                .map(|rating| (rating * item.effective_weight()).max(0))
                .sum(),
        })
        .filter(|entry| entry.intensity > 0)
        .collect();

    entries.sort_by(|a, b| b.intensity.cmp(&a.intensity));
    entries.truncate(config.top_n);
    entries
}
