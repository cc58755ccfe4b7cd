//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Resolve environment → load + validate config → start poll loop
//!
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast → poll loop stops at the next pass boundary
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
