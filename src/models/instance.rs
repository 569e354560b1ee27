//! Instance (physical copy) model and its lifecycle status

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DumpRecord;

/// Lifecycle status of an instance.
///
/// Encoded as an integer in dumps and query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum InstanceStatus {
    InUse = 0,
    InLibrary = 1,
    Withdrawn = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown instance status code {0}")]
pub struct UnknownStatus(pub i16);

impl TryFrom<i16> for InstanceStatus {
    type Error = UnknownStatus;

    fn try_from(v: i16) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(InstanceStatus::InUse),
            1 => Ok(InstanceStatus::InLibrary),
            2 => Ok(InstanceStatus::Withdrawn),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<InstanceStatus> for i16 {
    fn from(s: InstanceStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InstanceStatus::InUse => "in-use",
            InstanceStatus::InLibrary => "in-library",
            InstanceStatus::Withdrawn => "withdrawn",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(rename = "instance_id")]
    pub id: i32,
    pub book_id: i32,
    pub status: InstanceStatus,
}

impl DumpRecord for Instance {
    const COLLECTION: &'static str = "instances";

    fn id(&self) -> i32 {
        self.id
    }
}
