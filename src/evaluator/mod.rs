//! Trait registry, rated friends, the scoring engine and network analytics.

pub mod analytics;
pub mod domain;
pub mod scoring;
pub mod snapshot;
pub mod store;

#[cfg(test)]
mod tests;

pub use analytics::{AnalyticsConfig, AnalyticsReport, NetworkAnalytics, PopulationFilter};
pub use domain::{
    Friend, FriendId, Group, GroupId, ImpactLevel, Rating, Trait, TraitId, MAX_RATING,
};
pub use scoring::{Category, PolicyError, ScoreResult, ScoringEngine, ScoringPolicy};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
pub use store::{RosterStore, StoreError};
