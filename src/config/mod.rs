//! Configuration loading and management for the shift board.
//!
//! This module loads the server, logging, storage and seed settings from a
//! YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_board::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./shift-board.yaml").unwrap();
//! println!("Log level: {}", config.config().logging.level);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, LoggingConfig, SeedConfig, SeedEmployee, ServerConfig, StorageConfig,
};
