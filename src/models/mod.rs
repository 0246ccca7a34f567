//! Domain models for invoice-query-service.

mod invoice;

pub use invoice::{ALL_SENTINEL, InvoiceSummary, NewInvoice, ProcessingStatus, StatusFilter};
