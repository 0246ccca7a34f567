//! Invoice read models for invoice-query-service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// Reserved filter literal meaning "do not filter by status".
pub const ALL_SENTINEL: &str = "ALL";

/// Invoice processing status within the upstream pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    Pending,
    Success,
    Failed,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Pending => "PENDING",
            ProcessingStatus::Success => "SUCCESS",
            ProcessingStatus::Failed => "FAILED",
        }
    }

    /// Parse a status literal. `ALL` is not a status; it belongs to
    /// [`StatusFilter`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(ProcessingStatus::Pending),
            "SUCCESS" => Some(ProcessingStatus::Success),
            "FAILED" => Some(ProcessingStatus::Failed),
            _ => None,
        }
    }
}

/// Status filter for the listing query. `ALL` is a reserved keyword of the
/// filter input, not a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProcessingStatus),
}

impl StatusFilter {
    /// Parse the optional `processingStatus` query parameter. An absent
    /// parameter and the explicit `ALL` sentinel are equivalent; an
    /// unrecognized literal is rejected rather than treated as unfiltered.
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw {
            None => Ok(StatusFilter::All),
            Some(ALL_SENTINEL) => Ok(StatusFilter::All),
            Some(s) => ProcessingStatus::parse(s)
                .map(StatusFilter::Only)
                .ok_or_else(|| {
                    AppError::InvalidFilter(format!("unrecognized processingStatus '{}'", s))
                }),
        }
    }

    /// Status literal to match, or `None` for the unfiltered case.
    pub fn as_status_str(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(status.as_str()),
        }
    }

    /// Label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL_SENTINEL,
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Invoice summary projection returned by the listing query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceSummary {
    pub invoice_id: Uuid,
    pub invoice_number: String,
    pub processing_status: String,
    pub created_utc: DateTime<Utc>,
}

/// Input for inserting an invoice into the store.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub invoice_number: String,
    pub processing_status: ProcessingStatus,
    pub created_utc: DateTime<Utc>,
}
