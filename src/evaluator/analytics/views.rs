use super::super::domain::{FriendId, GroupId, TraitId};
use super::super::scoring::Category;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    /// Nobody provides the value.
    Empty,
    /// Too few providers; a single one is a single point of failure.
    Scarce,
}

impl GapSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            GapSeverity::Empty => "Empty",
            GapSeverity::Scarce => "Scarce",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderView {
    pub friend_id: FriendId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapEntry {
    pub trait_id: TraitId,
    pub trait_name: String,
    pub providers: usize,
    pub severity: GapSeverity,
    pub severity_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sole_provider: Option<ProviderView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemicIssueEntry {
    pub trait_id: TraitId,
    pub trait_name: String,
    pub affected: usize,
    /// Affected fraction of the population, `0.0..=1.0`.
    pub share: f64,
    pub intensity: i32,
}

impl SystemicIssueEntry {
    pub fn percent(&self) -> u8 {
        (self.share * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbivalenceEntry {
    pub friend_id: FriendId,
    pub friend_name: String,
    pub positive: i32,
    pub negative: i32,
    pub conflict: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnergyBalance {
    pub charging: usize,
    pub neutral: usize,
    pub draining: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DominantTraitEntry {
    pub trait_id: TraitId,
    pub trait_name: String,
    pub intensity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStanding {
    pub group_id: GroupId,
    pub group_name: String,
    pub member_count: usize,
    /// Mean score of non-disqualified members; absent when all are disqualified.
    pub average: Option<f64>,
    pub has_disqualified: bool,
    pub category: Category,
    pub category_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub population: usize,
    pub gaps: Vec<GapEntry>,
    pub systemic_issues: Vec<SystemicIssueEntry>,
    pub ambivalence: Vec<AmbivalenceEntry>,
    pub energy: EnergyBalance,
    pub dominant_traits: Vec<DominantTraitEntry>,
    pub group_ranking: Vec<GroupStanding>,
}
