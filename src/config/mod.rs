//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (TEMPLATES_FILE, CONSUL_HOST)
//!     → loader.rs (resolve + parse JSON config)
//!     → validation.rs (semantic checks, all errors reported)
//!     → DaemonConfig (validated, immutable)
//!     → one TemplateSpec per entry, owned by the poller
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; specs live for the process lifetime
//! - Validation separates syntactic (serde) from semantic checks
//! - Any startup error is fatal before the first fetch

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, StartupEnv};
pub use schema::DaemonConfig;
