use std::sync::Arc;

use chrono::{Duration, Utc};
use invoice_query_service::config::{QueryConfig, StoreBackend};
use invoice_query_service::models::{NewInvoice, ProcessingStatus};
use invoice_query_service::services::InvoiceStore;
use invoice_query_service::startup::Application;

pub const TEST_TOKEN: &str = "test-token";

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn InvoiceStore>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut config = QueryConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.store.backend = StoreBackend::Memory;

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, store }
    }

    /// Seed the backing store.
    pub async fn seed(&self, invoices: Vec<NewInvoice>) {
        for invoice in invoices {
            self.store
                .insert_invoice(invoice)
                .await
                .expect("Failed to seed invoice");
        }
    }

    /// GET a path with the test bearer token attached.
    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.address, path_and_query))
            .bearer_auth(TEST_TOKEN)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Invoice seed created `minutes_ago` minutes in the past.
#[allow(dead_code)]
pub fn invoice(number: &str, status: ProcessingStatus, minutes_ago: i64) -> NewInvoice {
    NewInvoice {
        invoice_number: number.to_string(),
        processing_status: status,
        created_utc: Utc::now() - Duration::minutes(minutes_ago),
    }
}
