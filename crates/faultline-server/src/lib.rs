#![allow(clippy::must_use_candidate)]

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::response::IntoResponse;
use faultline_config::Config;
use faultline_dispatch::Dispatcher;
use http::StatusCode;
use tower_http::trace::TraceLayer;

pub use routes::RouteTable;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration and an explicit route table
    ///
    /// Every registered route dispatches through one shared [`Dispatcher`]
    /// carrying the standard classification rules.
    pub fn new(config: Config, routes: RouteTable) -> Self {
        Self::with_dispatcher(config, routes, Dispatcher::default())
    }

    /// Build the server around a dispatcher with a custom rule table
    pub fn with_dispatcher(config: Config, routes: RouteTable, dispatcher: Dispatcher) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let dispatcher = Arc::new(dispatcher);
        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health_handler));
        }

        // Application routes, each wrapped by the dispatcher
        for (path, handler) in routes.into_entries() {
            let dispatcher = Arc::clone(&dispatcher);
            app = app.route(
                &path,
                axum::routing::any(move |request: Request| {
                    let dispatcher = Arc::clone(&dispatcher);
                    let handler = Arc::clone(&handler);
                    async move { dispatcher.dispatch(request, handler.as_ref()).await }
                }),
            );
        }

        // Request tracing
        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
