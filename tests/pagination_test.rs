//! Pagination and filter properties of the query core, exercised directly
//! against a seeded in-memory store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use invoice_query_service::error::AppError;
use invoice_query_service::models::{NewInvoice, ProcessingStatus, StatusFilter};
use invoice_query_service::services::{
    InMemoryInvoiceStore, InvoiceQuery, InvoiceStore, MAX_PAGE_SIZE,
};

/// Store seeded with the given number of invoices per status, each one
/// minute older than the last.
async fn store_with(pending: usize, success: usize, failed: usize) -> Arc<InMemoryInvoiceStore> {
    let store = Arc::new(InMemoryInvoiceStore::new());
    let now = Utc::now();
    let mut minute = 0i64;
    for (count, status) in [
        (pending, ProcessingStatus::Pending),
        (success, ProcessingStatus::Success),
        (failed, ProcessingStatus::Failed),
    ] {
        for i in 0..count {
            store
                .insert_invoice(NewInvoice {
                    invoice_number: format!("INV-{}-{}", status.as_str(), i),
                    processing_status: status,
                    created_utc: now - Duration::minutes(minute),
                })
                .await
                .expect("Failed to seed invoice");
            minute += 1;
        }
    }
    store
}

#[tokio::test]
async fn content_never_exceeds_size() {
    let query = InvoiceQuery::new(store_with(3, 2, 2).await);

    for page in 0..4 {
        let result = query
            .query(page, 3, StatusFilter::All)
            .await
            .expect("Query failed");
        assert!(result.content.len() <= 3);
    }
}

#[tokio::test]
async fn last_partial_page_holds_the_remainder() {
    let query = InvoiceQuery::new(store_with(3, 2, 2).await);

    let result = query
        .query(2, 3, StatusFilter::All)
        .await
        .expect("Query failed");
    assert_eq!(result.total_elements, 7);
    assert_eq!(result.total_pages, 3);
    assert_eq!(result.content.len(), 1);
}

#[tokio::test]
async fn exact_multiple_has_no_trailing_page() {
    let query = InvoiceQuery::new(store_with(3, 3, 0).await);

    let result = query
        .query(2, 3, StatusFilter::All)
        .await
        .expect("Query failed");
    assert_eq!(result.total_pages, 2);
    assert!(result.content.is_empty());
}

#[tokio::test]
async fn empty_store_has_zero_pages() {
    let query = InvoiceQuery::new(store_with(0, 0, 0).await);

    let result = query
        .query(0, 10, StatusFilter::All)
        .await
        .expect("Query failed");
    assert_eq!(result.total_elements, 0);
    assert_eq!(result.total_pages, 0);
    assert!(result.content.is_empty());
}

#[tokio::test]
async fn per_status_totals_partition_the_all_total() {
    let query = InvoiceQuery::new(store_with(2, 3, 4).await);

    let all = query
        .query(0, 100, StatusFilter::All)
        .await
        .expect("Query failed");

    let mut sum = 0;
    for status in [
        ProcessingStatus::Pending,
        ProcessingStatus::Success,
        ProcessingStatus::Failed,
    ] {
        let filtered = query
            .query(0, 100, StatusFilter::Only(status))
            .await
            .expect("Query failed");
        sum += filtered.total_elements;
    }

    assert_eq!(all.total_elements, 9);
    assert_eq!(sum, all.total_elements);
}

#[tokio::test]
async fn oversized_page_size_is_clamped() {
    let query = InvoiceQuery::new(store_with(2, 2, 2).await);

    let result = query
        .query(0, 100_000, StatusFilter::All)
        .await
        .expect("Query failed");
    assert_eq!(result.size, MAX_PAGE_SIZE as u64);
    assert_eq!(result.content.len(), 6);
}

#[tokio::test]
async fn negative_page_is_invalid_pagination() {
    let query = InvoiceQuery::new(store_with(1, 0, 0).await);

    let err = query
        .query(-1, 10, StatusFilter::All)
        .await
        .expect_err("Negative page must be rejected");
    assert!(matches!(err, AppError::InvalidPagination(_)));
}

#[tokio::test]
async fn non_positive_size_is_invalid_pagination() {
    let query = InvoiceQuery::new(store_with(1, 0, 0).await);

    for size in [0, -5] {
        let err = query
            .query(0, size, StatusFilter::All)
            .await
            .expect_err("Non-positive size must be rejected");
        assert!(matches!(err, AppError::InvalidPagination(_)));
    }
}

#[tokio::test]
async fn ordering_is_newest_first() {
    let query = InvoiceQuery::new(store_with(2, 2, 0).await);

    let result = query
        .query(0, 10, StatusFilter::All)
        .await
        .expect("Query failed");
    let timestamps: Vec<_> = result
        .content
        .iter()
        .map(|invoice| invoice.created_utc)
        .collect();

    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
}

#[tokio::test]
async fn equal_timestamps_break_ties_by_invoice_id() {
    let store = Arc::new(InMemoryInvoiceStore::new());
    let created_utc = Utc::now();
    for i in 0..3 {
        store
            .insert_invoice(NewInvoice {
                invoice_number: format!("INV-{}", i),
                processing_status: ProcessingStatus::Pending,
                created_utc,
            })
            .await
            .expect("Failed to seed invoice");
    }

    let query = InvoiceQuery::new(store);
    let result = query
        .query(0, 10, StatusFilter::All)
        .await
        .expect("Query failed");

    let ids: Vec<_> = result
        .content
        .iter()
        .map(|invoice| invoice.invoice_id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn paging_covers_every_invoice_exactly_once() {
    let query = InvoiceQuery::new(store_with(3, 3, 3).await);

    let mut seen = Vec::new();
    for page in 0..3 {
        let result = query
            .query(page, 4, StatusFilter::All)
            .await
            .expect("Query failed");
        seen.extend(result.content.into_iter().map(|invoice| invoice.invoice_id));
    }

    assert_eq!(seen.len(), 9);
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 9);
}

#[tokio::test]
async fn repeated_queries_are_idempotent() {
    let query = InvoiceQuery::new(store_with(2, 2, 1).await);

    let first = query
        .query(0, 3, StatusFilter::All)
        .await
        .expect("Query failed");
    let second = query
        .query(0, 3, StatusFilter::All)
        .await
        .expect("Query failed");

    let first_ids: Vec<_> = first.content.iter().map(|i| i.invoice_id).collect();
    let second_ids: Vec<_> = second.content.iter().map(|i| i.invoice_id).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(first.total_elements, second.total_elements);
}
