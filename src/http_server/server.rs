//! # HTTP Server
//!
//! Axum server exposing every entity of the document as a REST resource.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::EntityStore;

use super::config::HttpServerConfig;
use super::entity_routes::entity_routes;

/// HTTP server over one entity store
pub struct HttpServer {
    config: HttpServerConfig,
    store: EntityStore,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: EntityStore) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: EntityStore, config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config, store.clone());
        Self {
            config,
            store,
            router,
        }
    }

    fn build_router(config: &HttpServerConfig, store: EntityStore) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        entity_routes(store)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured host and port.
    ///
    /// The host may be an IP literal (v4 or v6) or a name such as `localhost`.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind((self.config.host.as_str(), self.config.port)).await
    }

    /// Serve requests on an already bound listener until the process exits
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;

        tracing::info!(event = "SERVER_STARTED", addr = %addr);
        match self.store.entity_names() {
            Ok(names) => {
                for name in names {
                    tracing::info!(event = "ROUTE", path = %format!("/{}", name), "GET POST");
                    tracing::info!(event = "ROUTE", path = %format!("/{}/:id", name), "GET PUT");
                }
            }
            Err(e) => tracing::warn!(event = "ROUTE_LISTING_FAILED", error = %e),
        }

        axum::serve(listener, self.router).await
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}
