//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProbeConfig (validated, immutable)
//!     → shared by reference with client and scenario runners
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a probe run never reloads
//! - All fields have defaults so the probe runs with no config file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::HttpConfig;
pub use schema::ProbeConfig;
pub use schema::ServerConfig;
pub use schema::WorkflowConfig;
