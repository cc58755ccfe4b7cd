//! Discovery backend subsystem.
//!
//! # Data Flow
//! ```text
//! client.rs:
//!     GET {base}/v1/health/service/{service}
//!     → raw response body (bytes)
//!
//! health.rs:
//!     raw body → serde parse → passing/failing partition (HostSet)
//! ```
//!
//! # Design Decisions
//! - One fetch per spec per cycle; the same body feeds both the change
//!   fingerprint and the classifier
//! - Unknown response fields are tolerated, missing required fields are not
//! - Host order follows response order, no sorting

pub mod client;
pub mod health;

pub use client::{DiscoveryClient, FetchError};
pub use health::{classify, Host, HostSet, ParseError};
