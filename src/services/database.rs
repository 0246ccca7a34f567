//! Postgres-backed invoice store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{InvoiceSummary, NewInvoice, StatusFilter};
use crate::services::metrics::STORE_QUERY_DURATION;
use crate::services::store::InvoiceStore;

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "invoice-query-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::BackingStore(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::BackingStore(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for Database {
    #[instrument(skip(self))]
    async fn count_invoices(&self, filter: &StatusFilter) -> Result<u64, AppError> {
        let timer = STORE_QUERY_DURATION
            .with_label_values(&["count_invoices"])
            .start_timer();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM invoices
            WHERE ($1::text IS NULL OR processing_status = $1)
            "#,
        )
        .bind(filter.as_status_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::BackingStore(anyhow::anyhow!("Failed to count invoices: {}", e)))?;

        timer.observe_duration();

        Ok(total as u64)
    }

    #[instrument(skip(self))]
    async fn list_invoices(
        &self,
        filter: &StatusFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<InvoiceSummary>, AppError> {
        let timer = STORE_QUERY_DURATION
            .with_label_values(&["list_invoices"])
            .start_timer();

        let invoices = sqlx::query_as::<_, InvoiceSummary>(
            r#"
            SELECT invoice_id, invoice_number, processing_status, created_utc
            FROM invoices
            WHERE ($1::text IS NULL OR processing_status = $1)
            ORDER BY created_utc DESC, invoice_id
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(filter.as_status_str())
        .bind(offset as i64)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::BackingStore(anyhow::anyhow!("Failed to list invoices: {}", e)))?;

        timer.observe_duration();

        Ok(invoices)
    }

    #[instrument(skip(self, input))]
    async fn insert_invoice(&self, input: NewInvoice) -> Result<InvoiceSummary, AppError> {
        let timer = STORE_QUERY_DURATION
            .with_label_values(&["insert_invoice"])
            .start_timer();

        let invoice_id = Uuid::new_v4();
        let invoice = sqlx::query_as::<_, InvoiceSummary>(
            r#"
            INSERT INTO invoices (invoice_id, invoice_number, processing_status, created_utc)
            VALUES ($1, $2, $3, $4)
            RETURNING invoice_id, invoice_number, processing_status, created_utc
            "#,
        )
        .bind(invoice_id)
        .bind(&input.invoice_number)
        .bind(input.processing_status.as_str())
        .bind(input.created_utc)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::BackingStore(anyhow::anyhow!("Failed to insert invoice: {}", e)))?;

        timer.observe_duration();

        info!(invoice_id = %invoice.invoice_id, "Invoice inserted");

        Ok(invoice)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::BackingStore(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }
}
