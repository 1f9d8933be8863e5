// src/db/portfolio_repository.rs
// DOCUMENTATION: Portfolio table reads
// PURPOSE: The three fixed query shapes, returning typed results

use crate::db::SupabaseClient;
use crate::errors::PortfolioError;
use crate::models::{Album, ExperienceLogEntry, Profile};

pub struct PortfolioRepository;

impl PortfolioRepository {
    /// Fetch the single profile row
    /// DOCUMENTATION: Zero or several rows yield `PortfolioError::NotSingleRow`
    pub async fn get_profile(client: &SupabaseClient) -> Result<Profile, PortfolioError> {
        client.from("profiles").select("*").single().fetch().await
    }

    /// Fetch all albums with their gallery images, newest first
    pub async fn list_albums(client: &SupabaseClient) -> Result<Vec<Album>, PortfolioError> {
        client
            .from("albums")
            .select("*,vessels_gallery(*)")
            .order("created_at", false)
            .fetch()
            .await
    }

    /// Fetch the experience log, most recent engagement first
    pub async fn list_experience(
        client: &SupabaseClient,
    ) -> Result<Vec<ExperienceLogEntry>, PortfolioError> {
        client
            .from("experience_logs")
            .select("*")
            .order("start_date", false)
            .fetch()
            .await
    }
}
