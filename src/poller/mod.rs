//! Polling subsystem.
//!
//! # Data Flow
//! ```text
//! Per pass, per spec, in config order (spec.rs holds per-spec state):
//!     fetch raw health body
//!     → observe fingerprint (always updates, reports changed)
//!     → unchanged: next spec
//!     → changed: classify → render → write target → callback
//!
//! Between passes (daemon.rs):
//!     sleep(interval) raced against the shutdown signal
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: no overlap between specs or between passes
//! - A failed cycle is logged and skipped unless `fail_fast` is set
//! - The fingerprint is the sole render/callback gate

pub mod daemon;
pub mod spec;

pub use daemon::{CycleError, Daemon};
pub use spec::TemplateSpec;
