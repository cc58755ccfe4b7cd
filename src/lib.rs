//! Discovery-driven configuration templating daemon.
//!
//! `confsync` watches named services in a Consul-shaped discovery backend and
//! keeps local configuration files in sync with their reported health:
//!
//! ```text
//!     TEMPLATES_FILE / CONSUL_HOST (environment)
//!         → config (parse + validate)
//!         → poller (one spec per watched template)
//!
//!     Every interval, per spec, in order:
//!         discovery  GET /v1/health/service/{service}
//!             → fingerprint raw body (change detection)
//!             → classify hosts into passing/failing   (only when changed)
//!             → render template, replace target file  (only when changed)
//!             → callback command                      (only when changed)
//! ```
//!
//! The poll loop is strictly sequential: one template at a time, one pass at
//! a time, with a cancellable sleep between passes. A change is any byte
//! difference in the raw discovery response; semantic equivalence is
//! intentionally not considered.

// Core subsystems
pub mod config;
pub mod discovery;
pub mod poller;
pub mod render;

// Side effects
pub mod callback;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::{CallbackConfig, DaemonConfig, TemplateConfig};
pub use lifecycle::Shutdown;
pub use poller::Daemon;
