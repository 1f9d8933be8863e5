// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod portfolio;

pub use health::config as health_config;
pub use portfolio::config as portfolio_config;
