// src/models/experience.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{date_column, Record};

/// A past work engagement (`experience_logs` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceLogEntry {
    pub fields: Record,
}

impl ExperienceLogEntry {
    /// Engagement start date, the column the log is ordered by
    pub fn start_date(&self) -> Option<NaiveDate> {
        date_column(&self.fields, "start_date")
    }
}
