use serde::{Deserialize, Serialize};

use crate::entities::movie;

/// Create-request body. Every field is optional; anything else the caller
/// sends (including a `status`) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NewMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub image_url: Option<String>,
}

/// Wire shape of one watchlist entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieRecord {
    pub id: i32,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub status: bool,
    pub image_url: Option<String>,
}

impl From<movie::Model> for MovieRecord {
    fn from(row: movie::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            genre: row.genre,
            status: row.status,
            image_url: row.image_url,
        }
    }
}
