//! Catalog book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DumpRecord;

/// Catalog record. Not borrowable itself; see [`super::Instance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[serde(rename = "book_id")]
    pub id: i32,
    pub name: String,
    pub author_id: i32,
    pub genre_id: i32,
    pub production_id: i32,
    pub language_id: i32,
    #[serde(default)]
    pub description: String,
}

impl DumpRecord for Book {
    const COLLECTION: &'static str = "books";

    fn id(&self) -> i32 {
        self.id
    }
}
