use serde::{Deserialize, Serialize};

use crate::models::InvoiceSummary;

/// Query parameters for `GET /api/invoices-v2`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub processing_status: Option<String>,
}

/// Generic paginated envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Convert the page content, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// Wire representation of an invoice summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummaryResponse {
    pub invoice_id: String,
    pub invoice_number: String,
    pub processing_status: String,
    pub created_utc: String,
}

impl From<InvoiceSummary> for InvoiceSummaryResponse {
    fn from(invoice: InvoiceSummary) -> Self {
        Self {
            invoice_id: invoice.invoice_id.to_string(),
            invoice_number: invoice.invoice_number,
            processing_status: invoice.processing_status,
            created_utc: invoice.created_utc.to_rfc3339(),
        }
    }
}
