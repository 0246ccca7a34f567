//! Services module for invoice-query-service.

pub mod database;
pub mod memory;
pub mod metrics;
pub mod query;
pub mod store;

pub use database::Database;
pub use memory::InMemoryInvoiceStore;
pub use metrics::{get_metrics, init_metrics};
pub use query::{DEFAULT_PAGE_SIZE, InvoiceQuery, MAX_PAGE_SIZE};
pub use store::InvoiceStore;
