use std::cmp::Ordering;

use super::super::domain::{Friend, Group, Trait};
use super::super::scoring::{Category, ScoringEngine};
use super::views::GroupStanding;

/// Groups ordered by the mean score of their non-disqualified members.
///
/// Empty groups are skipped. Groups whose members are all disqualified have no
/// average and always sort after every group with at least one valid member.
pub fn rank_groups(
    friends: &[&Friend],
    groups: &[Group],
    traits: &[Trait],
    engine: &ScoringEngine,
) -> Vec<GroupStanding> {
    let mut standings: Vec<GroupStanding> = groups
        .iter()
        .filter_map(|group| {
            let members: Vec<&Friend> = friends
                .iter()
                .copied()
                .filter(|friend| friend.in_group(&group.id))
                .collect();

            if members.is_empty() {
                return None;
            }

            let mut total = 0.0;
            let mut valid = 0usize;
            let mut has_disqualified = false;
            for member in &members {
                match engine.evaluate(member, traits).score {
                    Some(score) => {
                        total += score;
                        valid += 1;
                    }
                    None => has_disqualified = true,
                }
            }

            let average = (valid > 0).then(|| total / valid as f64);
            let category = average
                .map(|value| engine.policy().band_for(value))
                .unwrap_or(Category::Disqualified);

            Some(GroupStanding {
                group_id: group.id.clone(),
                group_name: group.name.clone(),
                member_count: members.len(),
                average,
                has_disqualified,
                category,
                category_label: category.label(),
            })
        })
        .collect();

    standings.sort_by(|a, b| match (a.average, b.average) {
        (Some(left), Some(right)) => right.total_cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    standings
}
