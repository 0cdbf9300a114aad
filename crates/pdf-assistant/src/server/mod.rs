//! HTTP server for the PDF assistant

pub mod routes;
pub mod state;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::RagConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Assistant HTTP server
pub struct RagServer {
    config: RagConfig,
    state: AppState,
    allowed_origin: HeaderValue,
}

impl RagServer {
    /// Create a new server with the configured providers
    pub async fn new(config: RagConfig) -> Result<Self> {
        let state = AppState::new(config.clone())?;
        Self::with_state(config, state)
    }

    /// Create a server around prebuilt state
    pub fn with_state(config: RagConfig, state: AppState) -> Result<Self> {
        let allowed_origin = HeaderValue::from_str(&config.server.allowed_origin).map_err(|e| {
            Error::Config(format!(
                "Invalid allowed origin '{}': {}",
                config.server.allowed_origin, e
            ))
        })?;

        Ok(Self {
            config,
            state,
            allowed_origin,
        })
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        // Only the deployed front end may call the API from a browser
        let cors = CorsLayer::new()
            .allow_origin(self.allowed_origin.clone())
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route("/", get(banner))
            .route("/health", get(health_check))
            .route("/ready", get(readiness))
            .merge(routes::api_routes(self.config.server.max_upload_size))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = self.build_router();

        tracing::info!("Starting PDF assistant on http://{}", addr);
        tracing::info!("Accepting browser requests from {}", self.config.server.allowed_origin);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }

    /// Get the shared state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Liveness banner
async fn banner() -> &'static str {
    "PDF Assistant Backend is running!"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Readiness check: 200 once a document has been processed
async fn readiness(state: axum::extract::State<AppState>) -> StatusCode {
    if state.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
