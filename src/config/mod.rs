//! Configuration module for VATA
//!
//! This module handles:
//! - Project-level configuration (vata.toml / .vatarc.json)
//! - CLI defaults
//! - Directory scan options

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, CliDefaults, ProjectConfig, ScanConfig,
    DEFAULT_EXTENSIONS,
};
