use super::super::domain::{Friend, Trait};
use super::views::AmbivalenceEntry;
use super::AnalyticsConfig;

/// Friends who score high on both the helpful and the harmful axis at once.
pub fn detect_ambivalence(
    friends: &[&Friend],
    traits: &[Trait],
    config: &AnalyticsConfig,
) -> Vec<AmbivalenceEntry> {
    let mut entries: Vec<AmbivalenceEntry> = friends
        .iter()
        .map(|friend| {
            let (positive, negative) = traits
                .iter()
                .filter(|item| item.is_weighted())
                .filter_map(|item| {
                    friend
                        .score_for(&item.id)
                        .map(|rating| item.effective_weight() * rating)
                })
                .fold((0, 0), |(positive, negative), impact| {
                    if impact > 0 {
                        (positive + impact, negative)
                    } else {
                        (positive, negative + impact.abs())
                    }
                });

            AmbivalenceEntry {
                friend_id: friend.id.clone(),
                friend_name: friend.name.clone(),
                positive,
                negative,
                conflict: positive.min(negative),
            }
        })
        .filter(|entry| entry.conflict > config.ambivalence_threshold)
        .collect();

    entries.sort_by(|a, b| b.conflict.cmp(&a.conflict));
    entries.truncate(config.top_n);
    entries
}
