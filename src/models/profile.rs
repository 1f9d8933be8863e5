// src/models/profile.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Record;

/// The portfolio owner's biographical record (`profiles` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    pub fields: Record,
}

impl Profile {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }
}
