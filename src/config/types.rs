//! Configuration types for the shift board.
//!
//! These are deserialized from the YAML configuration file. Every section
//! has defaults, so an empty file is a valid configuration.

use serde::Deserialize;

/// HTTP server binding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host or IP address to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (e.g., "info").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Storage behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Reject a second shift for the same employee and date at the store
    /// level, in addition to the validator check.
    pub enforce_daily_uniqueness: bool,
}

/// An employee created at startup when no employee has its code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEmployee {
    /// Display name.
    pub name: String,
    /// Unique employee code, used to detect an existing record.
    pub employee_code: String,
    /// Department.
    pub department: String,
}

/// Startup seed data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Employees to create if missing.
    pub employees: Vec<SeedEmployee>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let employee = |name: &str, code: &str, department: &str| SeedEmployee {
            name: name.to_string(),
            employee_code: code.to_string(),
            department: department.to_string(),
        };

        Self {
            employees: vec![
                employee("John Doe", "EMP001", "Engineering"),
                employee("Jane Smith", "EMP002", "Operations"),
                employee("Bob Johnson", "EMP003", "Administration"),
            ],
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server binding.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Storage behaviour.
    pub storage: StorageConfig,
    /// Startup seed data.
    pub seed: SeedConfig,
}
