// src/models/portfolio.rs
// DOCUMENTATION: Page-level DTOs served to the portfolio front end

use serde::Serialize;

use super::{Album, ExperienceLogEntry, Profile};

/// Everything the portfolio page renders; a part is `null` when its fetch failed
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioSnapshot {
    pub profile: Option<Profile>,
    pub albums: Option<Vec<Album>>,
    pub experience: Option<Vec<ExperienceLogEntry>>,
}

/// Head metadata for the portfolio site
#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub site_url: String,
}
