use std::fmt;
use std::io::Read;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::domain::{Friend, Group, Trait};

/// Format version written on export.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Exchange format holding the three roster collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub friends: Vec<Friend>,
    pub traits: Vec<Trait>,
    /// Older backups predate groups.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Group>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Group>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Snapshot {
    /// Stamps the collections with the current time and format version.
    pub fn new(friends: Vec<Friend>, traits: Vec<Trait>, groups: Vec<Group>) -> Self {
        Self {
            friends,
            traits,
            groups,
            export_date: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            version: Some(SNAPSHOT_VERSION),
        }
    }

    /// Accepts the payload only when `friends` and `traits` are arrays.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(raw).map_err(SnapshotError::Syntax)?;

        let is_array = |key: &str| value.get(key).is_some_and(Value::is_array);
        if !is_array("friends") || !is_array("traits") {
            return Err(SnapshotError::InvalidFormat);
        }

        serde_json::from_value(value).map_err(SnapshotError::Malformed)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SnapshotError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_json(&raw)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(SnapshotError::Encode)
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Syntax(serde_json::Error),
    InvalidFormat,
    Malformed(serde_json::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(err) => write!(f, "snapshot file error: {}", err),
            SnapshotError::Syntax(err) => write!(f, "snapshot is not valid JSON: {}", err),
            SnapshotError::InvalidFormat => {
                write!(f, "invalid format: expected 'friends' and 'traits' arrays")
            }
            SnapshotError::Malformed(err) => write!(f, "snapshot records are malformed: {}", err),
            SnapshotError::Encode(err) => write!(f, "failed to encode snapshot: {}", err),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(err) => Some(err),
            SnapshotError::Syntax(err)
            | SnapshotError::Malformed(err)
            | SnapshotError::Encode(err) => Some(err),
            SnapshotError::InvalidFormat => None,
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
