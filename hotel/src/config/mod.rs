//! Configuration system for the hotel.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `hotel.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation before a manager is built
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOTEL_*`)
//! 3. Private project config (`hotel.local.yaml`)
//! 4. Project config (`hotel.yaml`)
//! 5. User config (`~/.hotel/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use hotel::config::{Config, ConfigBuilder};
//! use hotel::ReservationManager;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config { room_count: Some(5), ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! let manager = ReservationManager::from_config(&config).unwrap();
//! assert_eq!(manager.rooms().len(), 5);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{BlockDefinition, Config, EmptyResultPolicy};
pub use validator::ConfigValidator;
