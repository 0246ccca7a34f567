use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::dtos::{InvoiceListParams, InvoiceSummaryResponse};
use crate::error::AppError;
use crate::middleware::BearerToken;
use crate::models::StatusFilter;
use crate::services::DEFAULT_PAGE_SIZE;
use crate::startup::AppState;

/// `GET /api/invoices-v2` — paginated invoice listing with an optional
/// status filter.
pub async fn list_invoices(
    State(state): State<AppState>,
    _token: BearerToken,
    Query(params): Query<InvoiceListParams>,
) -> Result<impl IntoResponse, AppError> {
    // Filter validation happens before any store access.
    let filter = StatusFilter::parse(params.processing_status.as_deref())?;

    let page = state
        .query
        .query(
            params.page.unwrap_or(0),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
            filter,
        )
        .await?;

    Ok(Json(page.map(InvoiceSummaryResponse::from)))
}
