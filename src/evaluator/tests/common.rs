use std::collections::BTreeMap;

use crate::evaluator::analytics::AnalyticsConfig;
use crate::evaluator::domain::{Friend, FriendId, Group, GroupId, Rating, Trait, TraitId};
use crate::evaluator::scoring::{ScoringEngine, ScoringPolicy};

pub(super) fn weighted(id: &str, weight: i32) -> Trait {
    Trait {
        id: TraitId::from(id),
        name: format!("{id} trait"),
        weight,
        is_no_go: false,
    }
}

pub(super) fn no_go(id: &str) -> Trait {
    Trait {
        id: TraitId::from(id),
        name: format!("{id} no-go"),
        weight: -7,
        is_no_go: true,
    }
}

pub(super) fn friend(id: &str, ratings: &[(&str, Rating)]) -> Friend {
    Friend {
        id: FriendId::from(id),
        name: id.to_uppercase(),
        group_id: None,
        ratings: ratings
            .iter()
            .map(|(trait_id, rating)| (TraitId::from(*trait_id), *rating))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub(super) fn member(id: &str, group: &str, ratings: &[(&str, Rating)]) -> Friend {
    Friend {
        group_id: Some(GroupId::from(group)),
        ..friend(id, ratings)
    }
}

pub(super) fn group(id: &str) -> Group {
    Group {
        id: GroupId::from(id),
        name: format!("{id} circle"),
    }
}

pub(super) fn score(value: i32) -> Rating {
    Rating::Score(value)
}

pub(super) fn flag(value: bool) -> Rating {
    Rating::Flag(value)
}

pub(super) fn refs(friends: &[Friend]) -> Vec<&Friend> {
    friends.iter().collect()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringPolicy::default())
}

pub(super) fn analytics_config() -> AnalyticsConfig {
    AnalyticsConfig::default()
}

/// Threshold sets the band properties must hold for.
pub(super) fn policy_sets() -> Vec<ScoringPolicy> {
    vec![
        ScoringPolicy::default(),
        ScoringPolicy {
            thriving_min: 80.0,
            good_min: 60.0,
            neutral_min: 25.0,
            draining_max: -15.0,
            toxic_threshold: -40,
        },
        ScoringPolicy {
            thriving_min: 90.0,
            good_min: 50.0,
            neutral_min: 10.0,
            draining_max: -1.0,
            toxic_threshold: -21,
        },
    ]
}
