//! Network-wide reducers over a rated population.
//!
//! Every reducer is pure and cheap; callers re-run them on each change instead
//! of maintaining anything incrementally.

mod ambivalence;
mod dominant;
mod energy;
mod gaps;
mod groups;
mod issues;
pub mod views;

pub use ambivalence::detect_ambivalence;
pub use dominant::dominant_traits;
pub use energy::energy_balance;
pub use gaps::detect_gaps;
pub use groups::rank_groups;
pub use issues::detect_systemic_issues;
pub use views::{
    AmbivalenceEntry, AnalyticsReport, DominantTraitEntry, EnergyBalance, GapEntry, GapSeverity,
    GroupStanding, ProviderView, SystemicIssueEntry,
};

use super::domain::{Friend, Group, GroupId, Trait};
use super::scoring::ScoringEngine;
use super::store::RosterStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunables shared by the reducers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Minimum weight for a trait to count as important.
    pub important_weight: i32,
    /// Minimum rating for a friend to count as a provider of a value.
    pub strong_rating: i32,
    pub min_providers: usize,
    pub systemic_min_share: f64,
    pub ambivalence_threshold: i32,
    pub top_n: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            important_weight: 5,
            strong_rating: 3,
            min_providers: 2,
            systemic_min_share: 0.2,
            ambivalence_threshold: 30,
            top_n: 3,
        }
    }
}

/// Which friends the reducers look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PopulationFilter {
    #[default]
    All,
    Ungrouped,
    Group(GroupId),
}

impl PopulationFilter {
    pub fn select<'a>(&self, friends: &'a [Friend]) -> Vec<&'a Friend> {
        friends
            .iter()
            .filter(|friend| match self {
                PopulationFilter::All => true,
                PopulationFilter::Ungrouped => friend.group_id.is_none(),
                PopulationFilter::Group(id) => friend.in_group(id),
            })
            .collect()
    }
}

/// Runs every reducer with one scoring engine and one set of tunables.
#[derive(Debug, Clone, Default)]
pub struct NetworkAnalytics {
    engine: ScoringEngine,
    config: AnalyticsConfig,
}

impl NetworkAnalytics {
    pub fn new(engine: ScoringEngine, config: AnalyticsConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn report(
        &self,
        friends: &[Friend],
        traits: &[Trait],
        groups: &[Group],
        filter: &PopulationFilter,
    ) -> AnalyticsReport {
        let population = filter.select(friends);

        let report = AnalyticsReport {
            population: population.len(),
            gaps: detect_gaps(&population, traits, &self.config),
            systemic_issues: detect_systemic_issues(&population, traits, &self.config),
            ambivalence: detect_ambivalence(&population, traits, &self.config),
            energy: energy_balance(&population, traits, &self.engine),
            dominant_traits: dominant_traits(&population, traits, &self.config),
            group_ranking: rank_groups(&population, groups, traits, &self.engine),
        };

        debug!(
            ?filter,
            population = report.population,
            gaps = report.gaps.len(),
            systemic_issues = report.systemic_issues.len(),
            "built analytics report"
        );

        report
    }

    pub fn report_for(&self, store: &RosterStore, filter: &PopulationFilter) -> AnalyticsReport {
        self.report(store.friends(), store.traits(), store.groups(), filter)
    }
}
