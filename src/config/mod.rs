// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod client;
pub mod env;

pub use client::init_supabase_client;
pub use env::Config;
