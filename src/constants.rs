//! Constants used throughout the application
//!
//! This module centralizes default values and other constants to improve
//! maintainability and consistency.

// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://roster.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const MAX_CONNECTIONS_LIMIT: u32 = 64;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// Config file discovery
pub const CONFIG_FILE_LOCAL: &str = "roster.toml";
pub const CONFIG_DIR_NAME: &str = "roster";
pub const CONFIG_FILE_NAME: &str = "config.toml";
