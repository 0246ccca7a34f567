use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{InvoiceSummary, NewInvoice, StatusFilter};

/// Backing store for invoice summaries.
///
/// Implementations return listings ordered by `created_utc` descending with
/// ties broken by `invoice_id`, so paging is stable across calls against an
/// unchanged snapshot.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Count invoices matching the filter.
    async fn count_invoices(&self, filter: &StatusFilter) -> Result<u64, AppError>;

    /// List invoices matching the filter, skipping `offset` rows and
    /// returning at most `limit`.
    async fn list_invoices(
        &self,
        filter: &StatusFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<InvoiceSummary>, AppError>;

    /// Insert an invoice. Ingest hook for the upstream pipeline and for
    /// seeding test snapshots; the query path never writes.
    async fn insert_invoice(&self, input: NewInvoice) -> Result<InvoiceSummary, AppError>;

    /// Check store connectivity.
    async fn health_check(&self) -> Result<(), AppError>;
}
