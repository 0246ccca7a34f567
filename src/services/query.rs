//! Paginated invoice query assembly.

use std::sync::Arc;

use crate::dtos::Page;
use crate::error::AppError;
use crate::models::{InvoiceSummary, StatusFilter};
use crate::services::metrics::INVOICE_QUERIES_TOTAL;
use crate::services::store::InvoiceStore;

/// Page size applied when the caller omits `size`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on the page size; larger requests are clamped.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Read-path query service over the invoice store.
#[derive(Clone)]
pub struct InvoiceQuery {
    store: Arc<dyn InvoiceStore>,
}

impl InvoiceQuery {
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self { store }
    }

    /// Run the paginated listing query.
    ///
    /// `page` is zero-based. Pages past the end of the result set yield an
    /// empty `content`, not an error. Validation happens before any store
    /// access; store errors propagate unmodified.
    pub async fn query(
        &self,
        page: i64,
        size: i64,
        filter: StatusFilter,
    ) -> Result<Page<InvoiceSummary>, AppError> {
        if page < 0 {
            return Err(AppError::InvalidPagination(format!(
                "page must be >= 0, got {}",
                page
            )));
        }
        if size <= 0 {
            return Err(AppError::InvalidPagination(format!(
                "size must be > 0, got {}",
                size
            )));
        }

        let page = page as u64;
        let size = size.min(MAX_PAGE_SIZE) as u64;

        let total_elements = self.store.count_invoices(&filter).await?;
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };

        // Pages at or past the end have nothing to fetch.
        let content = if page >= total_pages {
            Vec::new()
        } else {
            self.store.list_invoices(&filter, page * size, size).await?
        };

        INVOICE_QUERIES_TOTAL
            .with_label_values(&[filter.label()])
            .inc();

        Ok(Page {
            content,
            number: page,
            size,
            total_elements,
            total_pages,
        })
    }
}
