use roster::config::Config;
use roster::constants::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Zero connections should fail
    config.database.max_connections = 0;
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.database.max_connections = 4;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    // Empty database url should fail
    config.logging.level = "debug".to_string();
    config.database.url = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("max_connections = 4"));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[database]
url = "sqlite::memory:"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.database.url, "sqlite::memory:");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.database.url, default_config.database.url);
    assert_eq!(config.database.max_connections, default_config.database.max_connections);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("roster_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Roster Configuration File"));
    assert!(content.contains("max_connections = 4"));

    // Loading the generated file round-trips through validation
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.database.url, Config::default().database.url);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
