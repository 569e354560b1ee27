//! Author model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DumpRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    #[serde(rename = "author_id")]
    pub id: i32,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronymic: String,
    pub production_id: i32,
}

impl DumpRecord for Author {
    const COLLECTION: &'static str = "authors";

    fn id(&self) -> i32 {
        self.id
    }
}
