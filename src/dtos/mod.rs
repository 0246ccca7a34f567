pub mod invoices;

pub use invoices::{InvoiceListParams, InvoiceSummaryResponse, Page};
