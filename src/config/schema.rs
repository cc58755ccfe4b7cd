//! Configuration schema definitions.
//!
//! The config file is a JSON document with a `templates` array. All types
//! derive Serde traits for deserialization; optional sections fall back to
//! defaults so a minimal config only names its templates.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root configuration for the daemon.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DaemonConfig {
    /// Watched templates, polled in the order they are listed.
    pub templates: Vec<TemplateConfig>,

    /// Seconds to sleep between full polling passes.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Abort the daemon on the first failed poll cycle instead of logging
    /// the error and continuing with the remaining templates.
    #[serde(default)]
    pub fail_fast: bool,
}

/// One watched template: a service to query, a template to render, and a
/// target file to write.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    /// Service name to query in the discovery backend.
    pub service: String,

    /// Path of the template source file.
    pub template: PathBuf,

    /// Path the rendered output is written to.
    pub target: PathBuf,

    /// Optional command to run after each successful render.
    #[serde(default)]
    pub callback: Option<CallbackConfig>,

    /// Extra values exposed to the template as top-level context keys.
    #[serde(default)]
    pub params: Map<String, Value>,
}

/// Callback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallbackConfig {
    /// Shell command line, run via `sh -c`.
    pub command: String,
}

fn default_interval_secs() -> u64 {
    2
}
