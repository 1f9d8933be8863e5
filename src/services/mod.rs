// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod portfolio_service;

pub use portfolio_service::*;
