// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod album;
pub mod experience;
pub mod portfolio;
pub mod profile;
pub mod record;

pub use album::*;
pub use experience::*;
pub use portfolio::*;
pub use profile::*;
pub use record::*;
