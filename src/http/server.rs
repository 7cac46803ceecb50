//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the page and sum handlers
//! - Wire up middleware (tracing, request ID, timeout, body limit, panics)
//! - Bind server to listener
//! - Apply reloaded configuration while running

use arc_swap::ArcSwap;
use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::http::{page, response, sum};
use crate::security::headers::security_headers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live configuration; swapped on reload.
    pub config: Arc<ArcSwap<ServiceConfig>>,
}

/// Bound handling time; an expired request gets a structured 500.
#[allow(deprecated)]
pub fn with_request_timeout(router: Router, limit: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(limit))
        .layer(middleware::map_response(response::timeout_response))
}

/// HTTP server for the addition service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            config: Arc::new(ArcSwap::from_pointee(config.clone())),
        };
        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/", get(page::index))
            .route(sum::ROUTE, post(sum::sum_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(CatchPanicLayer::custom(response::panic_response));
        let mut router =
            with_request_timeout(router, Duration::from_secs(config.timeouts.request_secs));

        if config.security.enable_headers {
            router = security_headers(router);
        }

        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// A clone of the router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the live configuration.
    pub fn live_config(&self) -> Arc<ArcSwap<ServiceConfig>> {
        self.state.config.clone()
    }

    /// Run the server until the shutdown channel fires.
    ///
    /// Configs arriving on `config_updates` replace the live configuration.
    /// Listener settings are bound once and only change on restart.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<ServiceConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let live = self.state.config.clone();
        let bound = self.config.listener.clone();
        tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                if new_config.listener != bound {
                    tracing::warn!(
                        host = %new_config.listener.host,
                        port = new_config.listener.port,
                        "Listener changes take effect after restart"
                    );
                }
                tracing::info!(debug = new_config.debug, "Configuration reloaded");
                live.store(Arc::new(new_config));
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
