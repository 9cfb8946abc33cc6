mod app_state;
mod cli;

use loadveil_common::ConfigError;
use loadveil_config::schema::LoadveilConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Load config before logging is up; the error is returned for reporting.
fn load_config(args: &cli::Args) -> (LoadveilConfig, Option<ConfigError>) {
    let loaded = match args.config {
        Some(ref path) => loadveil_config::load_config_from(path),
        None => loadveil_config::load_config(),
    };
    let (mut config, error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (LoadveilConfig::default(), Some(e)),
    };
    if let Some(ref url) = args.url {
        config.resource.url = url.clone();
    }
    (config, error)
}

fn main() {
    let args = cli::parse();
    let (config, config_error) = load_config(&args);

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("loadveil={}", config.logging.level.as_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("Loadveil v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        url = %config.resource.url,
        timeout_secs = config.resource.timeout_secs,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::LoadveilApp::new(config, args.offline);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
