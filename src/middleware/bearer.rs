use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;

/// Bearer token extractor.
///
/// Requires a well-formed `Authorization: Bearer <token>` header and carries
/// the raw token through. Validating the token is the gateway's
/// responsibility; this service only refuses requests arriving without one.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized(anyhow::anyhow!("Missing Authorization header"))
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthorized(anyhow::anyhow!("Authorization header is not a bearer token"))
        })?;

        if token.is_empty() {
            return Err(AppError::Unauthorized(anyhow::anyhow!(
                "Empty bearer token"
            )));
        }

        Ok(BearerToken(token.to_string()))
    }
}
