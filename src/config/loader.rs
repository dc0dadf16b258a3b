//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! board configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{SchedulingError, SchedulingResult};

use super::types::AppConfig;

/// Loads and provides access to the application configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
/// logging:
///   level: info
/// storage:
///   enforce_daily_uniqueness: false
/// seed:
///   employees:
///     - name: John Doe
///       employee_code: EMP001
///       department: Engineering
/// ```
///
/// Sections left out of the file take their defaults.
///
/// # Example
///
/// ```no_run
/// use shift_board::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./shift-board.yaml").unwrap();
/// println!("Binding to {}", loader.config().server.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`SchedulingError::ConfigNotFound`] if the file cannot be read
    /// - [`SchedulingError::ConfigParseError`] if it is not valid configuration YAML
    pub fn load<P: AsRef<Path>>(path: P) -> SchedulingResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SchedulingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|message| SchedulingError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Parses configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "shift-board-{}-{}.yaml",
            name,
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let path = write_temp_config(
            "full",
            r#"
server:
  host: 0.0.0.0
  port: 9000
logging:
  level: debug
storage:
  enforce_daily_uniqueness: true
seed:
  employees:
    - name: Ada Lovelace
      employee_code: EMP010
      department: Research
"#,
        );

        let loader = ConfigLoader::load(&path).unwrap();
        let config = loader.config();
        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.logging.level, "debug");
        assert!(config.storage.enforce_daily_uniqueness);
        assert_eq!(config.seed.employees.len(), 1);
        assert_eq!(config.seed.employees[0].employee_code, "EMP010");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let loader = ConfigLoader::from_yaml_str("server:\n  port: 3000\n").unwrap();
        let config = loader.config();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert!(!config.storage.enforce_daily_uniqueness);
        assert_eq!(config.seed.employees.len(), 3);
    }

    #[test]
    fn test_empty_document_is_default() {
        let loader = ConfigLoader::from_yaml_str("   \n").unwrap();
        assert_eq!(loader.config(), &AppConfig::default());
    }

    #[test]
    fn test_empty_seed_list_disables_seeding() {
        let loader = ConfigLoader::from_yaml_str("seed:\n  employees: []\n").unwrap();
        assert!(loader.config().seed.employees.is_empty());
    }

    #[test]
    fn test_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("/definitely/not/here/shift-board.yaml");
        assert!(matches!(
            result,
            Err(SchedulingError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let path = write_temp_config("invalid", "server:\n  port: not-a-port\n");

        let result = ConfigLoader::load(&path);
        match result {
            Err(SchedulingError::ConfigParseError { path: p, message }) => {
                assert!(p.ends_with(".yaml"));
                assert!(!message.is_empty());
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }

        fs::remove_file(path).ok();
    }
}
