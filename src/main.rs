use confsync::config::{load_config, StartupEnv};
use confsync::lifecycle::{signals, Shutdown};
use confsync::observability::logging;
use confsync::poller::Daemon;

#[tokio::main]
async fn main() {
    logging::init("confsync=info");

    if let Err(error) = run().await {
        tracing::error!(%error, "fatal");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env = StartupEnv::from_env()?;

    tracing::info!(
        config = %env.templates_file.display(),
        discovery = %env.discovery_url,
        "starting confsync daemon"
    );

    let config = load_config(&env.templates_file)?;
    tracing::info!(templates = config.templates.len(), "configuration loaded");

    let shutdown = Shutdown::new();
    let poll_shutdown = shutdown.subscribe();
    tokio::spawn(signals::listen(shutdown));

    Daemon::new(config, env.discovery_url)
        .run(poll_shutdown)
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}
