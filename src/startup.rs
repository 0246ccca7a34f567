use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{QueryConfig, StoreBackend};
use crate::error::AppError;
use crate::handlers;
use crate::services::{Database, InMemoryInvoiceStore, InvoiceQuery, InvoiceStore};

#[derive(Clone)]
pub struct AppState {
    pub config: QueryConfig,
    pub store: Arc<dyn InvoiceStore>,
    pub query: InvoiceQuery,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: QueryConfig) -> Result<Self, AppError> {
        let store: Arc<dyn InvoiceStore> = match config.store.backend {
            StoreBackend::Postgres => {
                let db = Database::new(
                    &config.store.database_url,
                    config.store.max_connections,
                    config.store.min_connections,
                )
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to PostgreSQL: {}", e);
                    e
                })?;
                db.run_migrations().await.map_err(|e| {
                    tracing::error!("Failed to run database migrations: {}", e);
                    e
                })?;
                Arc::new(db)
            }
            StoreBackend::Memory => Arc::new(InMemoryInvoiceStore::new()),
        };

        let state = AppState {
            config: config.clone(),
            store: store.clone(),
            query: InvoiceQuery::new(store),
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/api/invoices-v2", get(handlers::list_invoices))
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn store(&self) -> Arc<dyn InvoiceStore> {
        self.state.store.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
