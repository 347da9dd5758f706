// Axum handlers must be async fns taking extractors by value, even when
// the store is synchronous.
#![allow(clippy::unused_async, clippy::needless_pass_by_value)]

//! HTTP server assembly for the rolodex API
//!
//! Wires the health and metadata endpoints, the contacts and users
//! resource routers, and the tracing layer into a single axum router.
//! Failed requests are written exactly once through the error response
//! path in [`error`].

mod contacts;
mod error;
mod health;
mod meta;
mod users;

use std::net::SocketAddr;
use std::time::Instant;

use axum::Router;
use rolodex_config::Config;
use rolodex_store::Store;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Opens the document store before the listener binds so a bad store
    /// URL fails startup instead of the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the store connection fails
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));

        let store = Store::connect(&config.store)?;
        let started = Instant::now();

        let mut app = Router::new().route("/", axum::routing::get(meta::root_handler));

        // Health check
        if config.server.health.enabled {
            app = app.route(
                &config.server.health.path,
                axum::routing::get(health::health_handler).with_state(started),
            );
        }

        // Resource routes
        app = app.merge(contacts::router(store.contacts.clone()));
        app = app.merge(users::router(store.users.clone()));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
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
