// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod portfolio_repository;
pub mod supabase_client;

pub use portfolio_repository::*;
pub use supabase_client::*;
