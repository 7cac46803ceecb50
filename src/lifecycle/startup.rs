//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration and apply command-line overrides
//! - Initialize logging and metrics
//! - Start the config watcher in debug mode
//! - Bind the listener and serve until a signal arrives

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::watcher::ConfigWatcher;
use crate::config::{load_config, validate_config, ConfigError, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::spawn_signal_handler;
use crate::observability::{logging, metrics};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid address `{0}`")]
    InvalidAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("failed to watch config file: {0}")]
    Watch(#[from] notify::Error),

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
}

impl Overrides {
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(host) = &self.host {
            config.listener.host = host.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if self.debug {
            config.debug = true;
        }
    }
}

/// Everything `start` needs from the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub config_path: Option<PathBuf>,
    pub overrides: Overrides,
}

/// Build the effective configuration: file (or defaults), then overrides.
pub fn resolve_config(options: &StartupOptions) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    options.overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Run the service until SIGINT/SIGTERM.
pub async fn start(options: StartupOptions) -> Result<(), StartupError> {
    let config = resolve_config(&options)?;

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sum-service starting");
    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        debug = config.debug,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::InvalidAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let addr = config
        .listener
        .socket_addr()
        .map_err(|_| StartupError::InvalidAddress(config.listener.host.clone()))?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let shutdown = Shutdown::new();
    spawn_signal_handler(shutdown.clone());

    let (updates_tx, updates_rx) = mpsc::unbounded_channel();
    // Dropping the watcher handle stops the watch, so it lives until serve returns.
    let _watcher = match (&options.config_path, config.debug) {
        (Some(path), true) => {
            let (watcher, mut raw_updates) = ConfigWatcher::new(path);
            let handle = watcher.run()?;
            let overrides = options.overrides.clone();
            tokio::spawn(async move {
                while let Some(mut reloaded) = raw_updates.recv().await {
                    overrides.apply(&mut reloaded);
                    if updates_tx.send(reloaded).is_err() {
                        break;
                    }
                }
            });
            Some(handle)
        }
        _ => None,
    };

    let server = HttpServer::new(config);
    server
        .run(listener, updates_rx, shutdown.subscribe())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
