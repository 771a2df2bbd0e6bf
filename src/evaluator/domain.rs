use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Highest rating magnitude a friend can receive on a weighted trait.
pub const MAX_RATING: i32 = 5;

/// Largest weight magnitude an impact level can carry.
pub const MAX_WEIGHT: i32 = ImpactLevel::Essential.weight();

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a user-defined trait.
    TraitId
);
string_id!(
    /// Identifier of a rated person.
    FriendId
);
string_id!(
    /// Identifier of a friend group.
    GroupId
);

/// Evaluation criterion: either a weighted scale or a boolean disqualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    pub id: TraitId,
    pub name: String,
    pub weight: i32,
    pub is_no_go: bool,
}

impl Trait {
    /// Weighted (non-disqualifier) trait.
    pub fn is_weighted(&self) -> bool {
        !self.is_no_go
    }

    /// Weight clamped to `[-MAX_WEIGHT, MAX_WEIGHT]`; imported backups may carry anything.
    pub fn effective_weight(&self) -> i32 {
        self.weight.clamp(-MAX_WEIGHT, MAX_WEIGHT)
    }

    pub fn impact_level(&self) -> Option<ImpactLevel> {
        ImpactLevel::from_weight(self.weight)
    }
}

/// Rated person. Ratings are keyed by trait id; a missing key means unrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    #[serde(default)]
    pub ratings: BTreeMap<TraitId, Rating>,
}

impl Friend {
    pub fn rating(&self, trait_id: &TraitId) -> Option<&Rating> {
        self.ratings.get(trait_id)
    }

    /// Clamped numeric rating, `None` when unrated or flagged.
    pub fn score_for(&self, trait_id: &TraitId) -> Option<i32> {
        self.rating(trait_id).and_then(Rating::score)
    }

    pub fn is_flagged(&self, trait_id: &TraitId) -> bool {
        matches!(self.rating(trait_id), Some(Rating::Flag(true)))
    }

    pub fn in_group(&self, group_id: &GroupId) -> bool {
        self.group_id.as_ref() == Some(group_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

/// Value a friend holds for one trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Flag(bool),
    Score(i32),
}

impl Rating {
    /// Numeric rating clamped to `[-MAX_RATING, MAX_RATING]`.
    pub fn clamped(value: i32) -> Self {
        Rating::Score(value.clamp(-MAX_RATING, MAX_RATING))
    }

    pub fn score(&self) -> Option<i32> {
        match self {
            Rating::Score(value) => Some((*value).clamp(-MAX_RATING, MAX_RATING)),
            Rating::Flag(_) => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Rating::Flag(_))
    }
}

/// Permitted trait weights. Sign says whether a high rating helps or hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    HarmsMe,
    WearsMeDown,
    NotGoodForMe,
    SlightlyOff,
    NiceToHave,
    GoodForMe,
    VeryImportant,
    Essential,
}

impl ImpactLevel {
    pub const fn ordered() -> [ImpactLevel; 8] {
        [
            ImpactLevel::HarmsMe,
            ImpactLevel::WearsMeDown,
            ImpactLevel::NotGoodForMe,
            ImpactLevel::SlightlyOff,
            ImpactLevel::NiceToHave,
            ImpactLevel::GoodForMe,
            ImpactLevel::VeryImportant,
            ImpactLevel::Essential,
        ]
    }

    pub const fn weight(self) -> i32 {
        match self {
            ImpactLevel::HarmsMe => -7,
            ImpactLevel::WearsMeDown => -5,
            ImpactLevel::NotGoodForMe => -3,
            ImpactLevel::SlightlyOff => -1,
            ImpactLevel::NiceToHave => 1,
            ImpactLevel::GoodForMe => 3,
            ImpactLevel::VeryImportant => 5,
            ImpactLevel::Essential => 7,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ImpactLevel::HarmsMe => "Harms me",
            ImpactLevel::WearsMeDown => "Wears me down",
            ImpactLevel::NotGoodForMe => "Not good for me",
            ImpactLevel::SlightlyOff => "Slightly off-putting",
            ImpactLevel::NiceToHave => "Nice to have",
            ImpactLevel::GoodForMe => "Good for me",
            ImpactLevel::VeryImportant => "Very important",
            ImpactLevel::Essential => "Essential",
        }
    }

    pub fn from_weight(weight: i32) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|level| level.weight() == weight)
    }
}
