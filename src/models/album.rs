// src/models/album.rs
// DOCUMENTATION: Album rows joined with their gallery images
// PURPOSE: Decode `albums?select=*,vessels_gallery(*)` responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{null_as_empty, timestamp_column, Record};

/// An image belonging to an album (`vessels_gallery` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryImage {
    pub fields: Record,
}

/// A named collection of gallery images
/// DOCUMENTATION: Album columns are kept as-is in `fields`; the joined
/// relation is lifted into `gallery` and is empty when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "vessels_gallery", default, deserialize_with = "null_as_empty")]
    pub gallery: Vec<GalleryImage>,

    #[serde(flatten)]
    pub fields: Record,
}

impl Album {
    /// Creation timestamp, the column albums are ordered by
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp_column(&self.fields, "created_at")
    }
}
