// src/config/client.rs
// DOCUMENTATION: Supabase client initialization
// PURPOSE: Build the shared PostgREST client from configuration

use crate::config::Config;
use crate::db::SupabaseClient;
use crate::errors::PortfolioError;

/// Initialize the Supabase PostgREST client
/// DOCUMENTATION: Called once during application startup in main.rs
/// The returned client is cloned into every request handler
pub fn init_supabase_client(config: &Config) -> Result<SupabaseClient, PortfolioError> {
    config.validate().map_err(PortfolioError::Config)?;

    log::info!("Initializing Supabase client: {}", config.supabase_url);
    let client = SupabaseClient::new(&config.supabase_url, &config.supabase_key)?;
    log::info!("Supabase client ready (rest endpoint: {})", client.rest_url());

    Ok(client)
}
