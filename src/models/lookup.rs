//! Pure lookup tables referenced by books and authors

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DumpRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    #[serde(rename = "genre_id")]
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Language {
    #[serde(rename = "language_id")]
    pub id: i32,
    pub name: String,
}

/// Publishing house
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Production {
    #[serde(rename = "production_id")]
    pub id: i32,
    pub name: String,
}

impl DumpRecord for Genre {
    const COLLECTION: &'static str = "genres";

    fn id(&self) -> i32 {
        self.id
    }
}

impl DumpRecord for Language {
    const COLLECTION: &'static str = "languages";

    fn id(&self) -> i32 {
        self.id
    }
}

impl DumpRecord for Production {
    const COLLECTION: &'static str = "productions";

    fn id(&self) -> i32 {
        self.id
    }
}
