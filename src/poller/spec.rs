//! Per-template runtime state and change detection.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::config::schema::TemplateConfig;

/// Content hash of a raw health response body.
///
/// Used purely for change detection; any byte difference counts as a change,
/// including reorderings that are semantically equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn of(body: &[u8]) -> Self {
        Self(Sha256::digest(body).into())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0[..8]))
    }
}

/// One watched template plus the fingerprint of its last seen response.
///
/// Constructed once at startup and mutated only by the poll loop, once per
/// successful fetch.
pub struct TemplateSpec {
    pub config: TemplateConfig,
    last_fingerprint: Option<Fingerprint>,
}

impl TemplateSpec {
    pub fn new(config: TemplateConfig) -> Self {
        Self {
            config,
            last_fingerprint: None,
        }
    }

    /// Record the fingerprint of a fetched body and report whether it differs
    /// from the previous fetch. The very first observation is always a change.
    pub fn observe(&mut self, body: &[u8]) -> bool {
        let fingerprint = Fingerprint::of(body);
        let changed = self
            .last_fingerprint
            .map_or(true, |previous| previous != fingerprint);
        if changed {
            tracing::debug!(service = %self.config.service, %fingerprint, "fingerprint changed");
        }
        self.last_fingerprint = Some(fingerprint);
        changed
    }
}
