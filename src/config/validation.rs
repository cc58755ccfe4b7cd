//! Configuration validation.
//!
//! Semantic checks on an already-deserialized [`DaemonConfig`]; serde has
//! handled the syntactic ones. Returns every violation, not just the first,
//! so a broken config can be fixed in one pass. Runs before any spec enters
//! the poll loop.

use thiserror::Error;

use crate::config::schema::DaemonConfig;

/// A single semantic violation in the config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no templates defined")]
    NoTemplates,

    #[error("templates[{0}]: service name is empty")]
    EmptyService(usize),

    #[error("templates[{0}]: template path is empty")]
    EmptyTemplate(usize),

    #[error("templates[{0}]: target path is empty")]
    EmptyTarget(usize),

    #[error("templates[{0}]: callback command is empty")]
    EmptyCallback(usize),

    #[error("templates[{0}]: params key \"hosts\" collides with the host sets")]
    ReservedParam(usize),

    #[error("templates[{index}] and templates[{previous}] write the same target {target}")]
    DuplicateTarget {
        index: usize,
        previous: usize,
        target: String,
    },

    #[error("interval_secs must be greater than zero")]
    ZeroInterval,
}

/// Validate a config, collecting all violations.
pub fn validate_config(config: &DaemonConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.templates.is_empty() {
        errors.push(ValidationError::NoTemplates);
    }

    if config.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    for (index, template) in config.templates.iter().enumerate() {
        if template.service.trim().is_empty() {
            errors.push(ValidationError::EmptyService(index));
        }
        if template.template.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyTemplate(index));
        }
        if template.target.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyTarget(index));
        }
        if let Some(callback) = &template.callback {
            if callback.command.trim().is_empty() {
                errors.push(ValidationError::EmptyCallback(index));
            }
        }
        if template.params.contains_key("hosts") {
            errors.push(ValidationError::ReservedParam(index));
        }

        if let Some(previous) = config.templates[..index]
            .iter()
            .position(|other| other.target == template.target && !template.target.as_os_str().is_empty())
        {
            errors.push(ValidationError::DuplicateTarget {
                index,
                previous,
                target: template.target.display().to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
