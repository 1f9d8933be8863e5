// src/services/portfolio_service.rs
// DOCUMENTATION: Portfolio data accessor
// PURPOSE: Page-facing reads that log failures and degrade to `None`

use crate::db::{PortfolioRepository, SupabaseClient};
use crate::errors::PortfolioError;
use crate::models::{Album, ExperienceLogEntry, PortfolioSnapshot, Profile};

pub struct PortfolioService;

impl PortfolioService {
    /// Fetch the owner's profile
    /// DOCUMENTATION: `None` when the table does not hold exactly one row or
    /// the backend cannot be reached. The cause is logged, never returned.
    pub async fn fetch_profile(client: &SupabaseClient) -> Option<Profile> {
        let profile = log_failure("profile", PortfolioRepository::get_profile(client).await)?;
        log::debug!("Fetched profile {:?}", profile.get("id"));
        Some(profile)
    }

    /// Fetch albums with nested gallery images, newest first
    pub async fn fetch_albums(client: &SupabaseClient) -> Option<Vec<Album>> {
        let albums = log_failure("albums", PortfolioRepository::list_albums(client).await)?;
        log::debug!(
            "Fetched {} albums ({} images), newest created {:?}",
            albums.len(),
            albums.iter().map(|a| a.gallery.len()).sum::<usize>(),
            albums.first().and_then(Album::created_at)
        );
        Some(albums)
    }

    /// Fetch experience-log entries, latest start date first
    pub async fn fetch_experience(client: &SupabaseClient) -> Option<Vec<ExperienceLogEntry>> {
        let entries = log_failure(
            "experience",
            PortfolioRepository::list_experience(client).await,
        )?;
        log::debug!(
            "Fetched {} experience entries, latest start {:?}",
            entries.len(),
            entries.first().and_then(ExperienceLogEntry::start_date)
        );
        Some(entries)
    }

    /// Run all three fetches concurrently for the portfolio page
    pub async fn fetch_snapshot(client: &SupabaseClient) -> PortfolioSnapshot {
        let (profile, albums, experience) = tokio::join!(
            Self::fetch_profile(client),
            Self::fetch_albums(client),
            Self::fetch_experience(client),
        );

        PortfolioSnapshot {
            profile,
            albums,
            experience,
        }
    }
}

fn log_failure<T>(what: &str, result: Result<T, PortfolioError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Error fetching {}: {}", what, e);
            None
        }
    }
}
