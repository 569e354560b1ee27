//! Reader model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DumpRecord;

/// A person holding zero or more borrowed instances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reader {
    #[serde(rename = "reader_id")]
    pub id: i32,
    /// Borrowed instance ids, in borrow order
    #[serde(rename = "instance_id", default)]
    pub instance_ids: Vec<i32>,
}

impl DumpRecord for Reader {
    const COLLECTION: &'static str = "readers";

    fn id(&self) -> i32 {
        self.id
    }
}
