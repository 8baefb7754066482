//! Configuration for the media gallery client
//!
//! This crate provides:
//! - Platform config directory lookup
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, config_dir};
