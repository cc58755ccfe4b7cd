//! The daemon's poll loop.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::broadcast;
use url::Url;

use crate::callback::{self, CallbackError};
use crate::config::schema::DaemonConfig;
use crate::discovery::client::{DiscoveryClient, FetchError};
use crate::discovery::health::{classify, ParseError};
use crate::poller::spec::TemplateSpec;
use crate::render::{self, RenderError};

/// Error type for a single poll cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Callback(#[from] CallbackError),
}

/// What a poll cycle did for one spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fingerprint unchanged; nothing written, nothing executed.
    Unchanged,
    /// Fingerprint changed; the target was re-rendered (and the callback ran,
    /// if one is configured).
    Rendered,
}

/// The orchestrator: owns the specs and drives the polling passes.
pub struct Daemon {
    client: DiscoveryClient,
    specs: Vec<TemplateSpec>,
    interval: Duration,
    fail_fast: bool,
}

impl Daemon {
    /// Build a daemon from a validated config and the discovery base URL.
    pub fn new(config: DaemonConfig, discovery_url: Url) -> Self {
        let specs = config
            .templates
            .into_iter()
            .map(TemplateSpec::new)
            .collect();

        Self {
            client: DiscoveryClient::new(discovery_url),
            specs,
            interval: Duration::from_secs(config.interval_secs),
            fail_fast: config.fail_fast,
        }
    }

    /// Run polling passes until shutdown is signalled.
    ///
    /// Specs are visited sequentially in config order; a pass always
    /// completes before the inter-pass sleep, and the sleep is the only
    /// cancellation point. Cycle errors are logged and the loop continues,
    /// unless `fail_fast` is set, in which case the first error aborts the
    /// daemon.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> Result<(), CycleError> {
        tracing::info!(
            templates = self.specs.len(),
            interval_secs = self.interval.as_secs(),
            "starting poll loop"
        );

        loop {
            for spec in self.specs.iter_mut() {
                match poll_template(&self.client, spec).await {
                    Ok(_) => {}
                    Err(error) if self.fail_fast => {
                        tracing::error!(
                            service = %spec.config.service,
                            target = %spec.config.target.display(),
                            %error,
                            "poll cycle failed, aborting"
                        );
                        return Err(error);
                    }
                    Err(error) => {
                        tracing::error!(
                            service = %spec.config.service,
                            target = %spec.config.target.display(),
                            %error,
                            "poll cycle failed, continuing with remaining templates"
                        );
                    }
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.recv() => {
                    tracing::info!("shutdown signal received, stopping poll loop");
                    return Ok(());
                }
            }
        }
    }
}

/// One cycle for one spec: fetch → observe → classify → render → callback.
///
/// The fingerprint is recorded on every successful fetch, changed or not;
/// everything after the change gate runs only on a changed body.
async fn poll_template(
    client: &DiscoveryClient,
    spec: &mut TemplateSpec,
) -> Result<CycleOutcome, CycleError> {
    let body = client.service_health(&spec.config.service).await?;

    if !spec.observe(&body) {
        tracing::debug!(service = %spec.config.service, "no status change");
        return Ok(CycleOutcome::Unchanged);
    }

    let hosts = classify(&body, &spec.config.service)?;
    tracing::info!(
        service = %spec.config.service,
        target = %spec.config.target.display(),
        passing = hosts.passing.len(),
        failing = hosts.failing.len(),
        "rendering template"
    );

    let output = render::render(&spec.config.template, &hosts, &spec.config.params)?;
    render::write_atomic(&spec.config.target, &output)?;
    tracing::info!(target = %spec.config.target.display(), "target file replaced");

    if let Some(cb) = &spec.config.callback {
        callback::run(&cb.command).await?;
    }

    Ok(CycleOutcome::Rendered)
}
