//! Configuration module for the file-harvester.
//!
//! This module handles:
//! - Loading configuration from JSON (or TOML) files
//! - Organization rule parsing
//! - Configuration validation

pub mod loader;
pub mod rules;
pub mod validation;

pub use loader::Config;
pub use rules::OrganizationRule;
pub use validation::{config_warnings, validate_config};
