//! Observability subsystem.
//!
//! Everything the daemon reports goes through structured `tracing` events;
//! there is no global logger object of our own beyond the subscriber
//! registry initialized once at startup. Per-cycle noise (unchanged polls,
//! callback output) sits at debug; state changes (renders, replaced targets,
//! callback exits) at info; isolated cycle failures at error.

pub mod logging;
