//! In-memory invoice store for tests and local development.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{InvoiceSummary, NewInvoice, StatusFilter};
use crate::services::store::InvoiceStore;

/// Invoice store holding its snapshot in process. Filtering, ordering and
/// slicing semantics match the Postgres backend.
#[derive(Default)]
pub struct InMemoryInvoiceStore {
    invoices: RwLock<Vec<InvoiceSummary>>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching(&self, filter: &StatusFilter) -> Result<Vec<InvoiceSummary>, AppError> {
        let invoices = self
            .invoices
            .read()
            .map_err(|_| AppError::BackingStore(anyhow::anyhow!("Invoice store lock poisoned")))?;

        let mut matching: Vec<InvoiceSummary> = invoices
            .iter()
            .filter(|invoice| match filter.as_status_str() {
                None => true,
                Some(status) => invoice.processing_status == status,
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.created_utc
                .cmp(&a.created_utc)
                .then_with(|| a.invoice_id.cmp(&b.invoice_id))
        });

        Ok(matching)
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn count_invoices(&self, filter: &StatusFilter) -> Result<u64, AppError> {
        Ok(self.matching(filter)?.len() as u64)
    }

    async fn list_invoices(
        &self,
        filter: &StatusFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<InvoiceSummary>, AppError> {
        Ok(self
            .matching(filter)?
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn insert_invoice(&self, input: NewInvoice) -> Result<InvoiceSummary, AppError> {
        let invoice = InvoiceSummary {
            invoice_id: Uuid::new_v4(),
            invoice_number: input.invoice_number,
            processing_status: input.processing_status.as_str().to_string(),
            created_utc: input.created_utc,
        };

        let mut invoices = self
            .invoices
            .write()
            .map_err(|_| AppError::BackingStore(anyhow::anyhow!("Invoice store lock poisoned")))?;
        invoices.push(invoice.clone());

        Ok(invoice)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
