//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router: one handler, any path, any method
//! - Wire up middleware (tracing, inbound timeout)
//! - Gate on the request method before anything touches the network
//! - Drive one request through fetch → extract → normalize → compose
//! - Serve with graceful shutdown

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::extract;
use crate::http::response::{json_response, render_reading};
use crate::lifecycle;
use crate::normalize;
use crate::upstream::{FetchInitError, Fetcher};

/// Application state injected into the handler.
///
/// Nothing in here is mutable; requests share the client configuration and
/// nothing else.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<Fetcher>,
    pub device_name: Arc<str>,
}

/// HTTP server for the meter gateway.
pub struct GatewayServer {
    router: Router,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, FetchInitError> {
        let user_agent = format!("{}/{}", config.device.name, env!("CARGO_PKG_VERSION"));
        let fetcher = Arc::new(Fetcher::new(&config.upstream, &user_agent)?);
        let state = AppState {
            fetcher,
            device_name: config.device.name.as_str().into(),
        };
        Ok(Self {
            router: Self::build_router(config, state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(meter_handler))
            .route("/{*path}", any(meter_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_millis(
                config.listener.request_timeout_ms,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until an
    /// OS signal arrives or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = lifecycle::interrupt() => {},
                    _ = shutdown.recv() => {},
                }
                tracing::info!("Draining; no further connections accepted");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// The single gateway handler. Path is irrelevant; only the method is
/// checked, and the upstream is never contacted for a rejected method.
async fn meter_handler(State(state): State<AppState>, method: Method) -> Response {
    if method != Method::GET {
        tracing::debug!(method = %method, "Rejecting non-GET request");
        return GatewayError::Method(method).into_response();
    }

    match read_meter(&state).await {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => {
            tracing::warn!(error = %err, status = %err.status(), "Request failed");
            err.into_response()
        }
    }
}

/// One pass through the pipeline; the first failing stage terminates it.
async fn read_meter(state: &AppState) -> Result<String, GatewayError> {
    let page = state.fetcher.fetch().await?;
    let fields = extract::extract(&page)?;
    let reading = normalize::normalize(fields)?;
    render_reading(&reading, &state.device_name, state.fetcher.source())
}
