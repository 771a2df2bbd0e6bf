use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::analytics::PopulationFilter;
use super::domain::{Friend, FriendId, Group, GroupId, ImpactLevel, Rating, Trait, TraitId};
use super::scoring::{ScoreResult, ScoringEngine};
use super::snapshot::{Snapshot, SnapshotError};

/// Single owner of the trait registry, the friends and the groups.
///
/// Friends reference groups and traits by id only; every removal cascades so
/// no dangling ids survive a mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterStore {
    friends: Vec<Friend>,
    traits: Vec<Trait>,
    groups: Vec<Group>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut store = Self::default();
        store.load_snapshot(snapshot);
        store
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn friend(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| &friend.id == id)
    }

    pub fn trait_by_id(&self, id: &TraitId) -> Option<&Trait> {
        self.traits.iter().find(|item| &item.id == id)
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|group| &group.id == id)
    }

    pub fn members_of(&self, id: &GroupId) -> Vec<&Friend> {
        PopulationFilter::Group(id.clone()).select(&self.friends)
    }

    fn friend_mut(&mut self, id: &FriendId) -> Result<&mut Friend, StoreError> {
        self.friends
            .iter_mut()
            .find(|friend| &friend.id == id)
            .ok_or_else(|| StoreError::UnknownFriend(id.clone()))
    }

    fn ensure_group(&self, id: Option<&GroupId>) -> Result<(), StoreError> {
        match id {
            Some(id) if self.group(id).is_none() => Err(StoreError::UnknownGroup(id.clone())),
            _ => Ok(()),
        }
    }

    pub fn add_friend(
        &mut self,
        name: &str,
        group_id: Option<GroupId>,
    ) -> Result<FriendId, StoreError> {
        let name = non_empty(name, "friend")?;
        self.ensure_group(group_id.as_ref())?;

        let id = FriendId::generate();
        self.friends.push(Friend {
            id: id.clone(),
            name,
            group_id,
            ratings: BTreeMap::new(),
        });
        debug!(friend = %id, "added friend");
        Ok(id)
    }

    pub fn remove_friend(&mut self, id: &FriendId) -> Result<Friend, StoreError> {
        let index = self
            .friends
            .iter()
            .position(|friend| &friend.id == id)
            .ok_or_else(|| StoreError::UnknownFriend(id.clone()))?;
        let removed = self.friends.remove(index);
        debug!(friend = %id, "removed friend");
        Ok(removed)
    }

    /// `None` clears the membership.
    pub fn assign_group(
        &mut self,
        friend_id: &FriendId,
        group_id: Option<GroupId>,
    ) -> Result<(), StoreError> {
        self.ensure_group(group_id.as_ref())?;
        let friend = self.friend_mut(friend_id)?;
        friend.group_id = group_id;
        Ok(())
    }

    /// Stores a rating whose kind matches the trait, clamping numeric values.
    pub fn set_rating(
        &mut self,
        friend_id: &FriendId,
        trait_id: &TraitId,
        rating: Rating,
    ) -> Result<Rating, StoreError> {
        let is_no_go = self
            .trait_by_id(trait_id)
            .map(|item| item.is_no_go)
            .ok_or_else(|| StoreError::UnknownTrait(trait_id.clone()))?;

        let stored = match (is_no_go, rating) {
            (true, Rating::Flag(flag)) => Rating::Flag(flag),
            (false, Rating::Score(value)) => Rating::clamped(value),
            (true, Rating::Score(_)) => {
                return Err(StoreError::RatingKindMismatch {
                    trait_id: trait_id.clone(),
                    expected: "boolean",
                })
            }
            (false, Rating::Flag(_)) => {
                return Err(StoreError::RatingKindMismatch {
                    trait_id: trait_id.clone(),
                    expected: "numeric",
                })
            }
        };

        let friend = self.friend_mut(friend_id)?;
        friend.ratings.insert(trait_id.clone(), stored);
        debug!(friend = %friend_id, trait_id = %trait_id, ?stored, "set rating");
        Ok(stored)
    }

    /// Returns the trait to "unrated" for this friend.
    pub fn clear_rating(
        &mut self,
        friend_id: &FriendId,
        trait_id: &TraitId,
    ) -> Result<Option<Rating>, StoreError> {
        let friend = self.friend_mut(friend_id)?;
        Ok(friend.ratings.remove(trait_id))
    }

    pub fn add_trait(
        &mut self,
        name: &str,
        impact: ImpactLevel,
        is_no_go: bool,
    ) -> Result<TraitId, StoreError> {
        let name = non_empty(name, "trait")?;

        let id = TraitId::generate();
        self.traits.push(Trait {
            id: id.clone(),
            name,
            weight: impact.weight(),
            is_no_go,
        });
        debug!(trait_id = %id, weight = impact.weight(), is_no_go, "added trait");
        Ok(id)
    }

    /// Removes the trait and its rating from every friend.
    pub fn remove_trait(&mut self, id: &TraitId) -> Result<Trait, StoreError> {
        let index = self
            .traits
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| StoreError::UnknownTrait(id.clone()))?;
        let removed = self.traits.remove(index);

        let cleared = self
            .friends
            .iter_mut()
            .map(|friend| friend.ratings.remove(id).is_some())
            .filter(|removed| *removed)
            .count();
        info!(trait_id = %id, cleared, "removed trait and its ratings");
        Ok(removed)
    }

    pub fn add_group(&mut self, name: &str) -> Result<GroupId, StoreError> {
        let name = non_empty(name, "group")?;

        let id = GroupId::generate();
        self.groups.push(Group {
            id: id.clone(),
            name,
        });
        debug!(group = %id, "added group");
        Ok(id)
    }

    /// Removes the group; its members stay and become ungrouped.
    pub fn remove_group(&mut self, id: &GroupId) -> Result<Group, StoreError> {
        let index = self
            .groups
            .iter()
            .position(|group| &group.id == id)
            .ok_or_else(|| StoreError::UnknownGroup(id.clone()))?;
        let removed = self.groups.remove(index);

        let mut released = 0usize;
        for friend in self.friends.iter_mut().filter(|friend| friend.in_group(id)) {
            friend.group_id = None;
            released += 1;
        }
        info!(group = %id, released, "removed group");
        Ok(removed)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.friends.clone(),
            self.traits.clone(),
            self.groups.clone(),
        )
    }

    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        let Snapshot {
            friends,
            traits,
            groups,
            ..
        } = snapshot;

        info!(
            friends = friends.len(),
            traits = traits.len(),
            groups = groups.len(),
            "loaded roster snapshot"
        );
        self.friends = friends;
        self.traits = traits;
        self.groups = groups;
    }

    /// Replaces the roster from JSON; on failure nothing changes.
    pub fn import_json(&mut self, raw: &str) -> Result<(), SnapshotError> {
        match Snapshot::from_json(raw) {
            Ok(snapshot) => {
                self.load_snapshot(snapshot);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejected roster import");
                Err(err)
            }
        }
    }

    pub fn export_json(&self) -> Result<String, SnapshotError> {
        self.snapshot().to_json()
    }

    pub fn reset_all(&mut self) {
        self.friends.clear();
        self.traits.clear();
        self.groups.clear();
        info!("reset roster");
    }

    /// Scores for the friends selected by `filter`, in roster order.
    pub fn scores(&self, engine: &ScoringEngine, filter: &PopulationFilter) -> Vec<ScoreResult> {
        filter
            .select(&self.friends)
            .into_iter()
            .map(|friend| engine.evaluate(friend, &self.traits))
            .collect()
    }
}

fn non_empty(name: &str, kind: &'static str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyName(kind));
    }
    Ok(trimmed.to_string())
}

/// Rejected roster mutation; the store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("friend {0} not found")]
    UnknownFriend(FriendId),
    #[error("trait {0} not found")]
    UnknownTrait(TraitId),
    #[error("group {0} not found")]
    UnknownGroup(GroupId),
    #[error("{0} name must not be empty")]
    EmptyName(&'static str),
    #[error("trait {trait_id} expects a {expected} rating")]
    RatingKindMismatch {
        trait_id: TraitId,
        expected: &'static str,
    },
}
