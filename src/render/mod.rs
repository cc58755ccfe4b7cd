//! Template rendering and target file replacement.
//!
//! The template source is read once per render and compiled fresh, so edits
//! to a template file take effect on the next changed cycle without a
//! restart. The context exposes the host partition under `hosts` plus any
//! per-template params as top-level keys:
//!
//! ```text
//! {% for host in hosts.passing %}
//! server {{ host.address }}:{{ host.port }}; # {{ host.name }}
//! {% endfor %}
//! ```
//!
//! Output replaces the target through a temp file in the same directory
//! followed by a rename, so readers never observe a partially written file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tera::{Context, Tera};
use thiserror::Error;

use crate::discovery::health::HostSet;

/// Error type for rendering and writing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template {path}: {source}")]
    Template { path: PathBuf, source: tera::Error },

    #[error("failed to write target {path}: {source}")]
    WriteTarget {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render a template source against a host partition and extra params.
///
/// Params are inserted first and `hosts` last, so a params key can never
/// shadow the host sets (config validation additionally rejects a `hosts`
/// param). Undefined references in the template are errors, as are syntax
/// errors in the source.
pub fn render(
    template: &Path,
    hosts: &HostSet,
    params: &Map<String, Value>,
) -> Result<String, RenderError> {
    let source = fs::read_to_string(template).map_err(|source| RenderError::ReadTemplate {
        path: template.to_path_buf(),
        source,
    })?;

    let name = template.display().to_string();
    let mut tera = Tera::default();
    // Rendered output is arbitrary config text, not HTML.
    tera.autoescape_on(vec![]);
    tera.add_raw_template(&name, &source)
        .map_err(|source| RenderError::Template {
            path: template.to_path_buf(),
            source,
        })?;

    let mut context = Context::new();
    for (key, value) in params {
        context.insert(key.as_str(), value);
    }
    context.insert("hosts", hosts);

    tera.render(&name, &context)
        .map_err(|source| RenderError::Template {
            path: template.to_path_buf(),
            source,
        })
}

/// Replace the target file with the rendered contents.
pub fn write_atomic(target: &Path, contents: &str) -> Result<(), RenderError> {
    let io_error = |source| RenderError::WriteTarget {
        path: target.to_path_buf(),
        source,
    };

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let mut tmp = target.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).map_err(io_error)?;
    fs::rename(&tmp, target).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        io_error(source)
    })
}
