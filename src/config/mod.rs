//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via ArcSwap with the HTTP handlers
//!
//! In debug mode:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of Arc<ServiceConfig>
//! ```
//!
//! Every field has a default, so an empty file (or no file) is a valid config.

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, SecurityConfig, ServiceConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
