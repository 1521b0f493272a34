//! # HTTP Server
//!
//! Axum server wiring the five student routes to a shared store handle.
//! The store is constructed by the caller and passed in explicitly — there
//! is no process-wide connection state, so tests can run isolated server
//! instances in parallel.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::store::StudentStore;

use super::config::HttpConfig;
use super::handlers;

/// Shared request state: the one store handle all handlers use.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

/// HTTP server for the student record service
pub struct ApiServer {
    config: HttpConfig,
    router: Router,
}

impl ApiServer {
    /// Create a server over the given store with default configuration
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self::with_config(store, HttpConfig::default())
    }

    /// Create a server over the given store with custom configuration
    pub fn with_config(store: Arc<dyn StudentStore>, config: HttpConfig) -> Self {
        let router = build_router(store);
        Self { config, router }
    }

    /// The configured bind address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Take the router (for testing without a socket)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = tokio::net::TcpListener::bind(addr).await?;
        Logger::info("SERVER_STARTED", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await
    }
}

/// Build the router with all five student routes.
pub fn build_router(store: Arc<dyn StudentStore>) -> Router {
    let state = AppState { store };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/Student/getstudent", get(handlers::get_student))
        .route("/Student/listall", get(handlers::list_students))
        .route(
            "/Student",
            post(handlers::create_student).patch(handlers::normalize_grades),
        )
        .route("/Student/{year}", delete(handlers::delete_students))
        .layer(cors)
        .with_state(state)
}
