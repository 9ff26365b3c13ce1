//! Gateway error taxonomy.
//!
//! One variant per pipeline stage that can fail. The connection handler
//! maps the first failure it sees straight to a terminal HTTP response;
//! nothing is retried and nothing is substituted.

use axum::http::{Method, StatusCode};
use thiserror::Error;

use crate::extract::ExtractError;
use crate::normalize::NormalizeError;
use crate::upstream::FetchError;

/// Any failure on the inbound-request pipeline.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The inbound request used a method other than GET.
    #[error("method {0} not allowed")]
    Method(Method),

    /// The upstream fetch failed (network, timeout, status, empty body).
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A required field could not be located on the page.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// A required field's content was not numeric.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// The rendered response body exceeded the output buffer.
    #[error("response body exceeded the output buffer")]
    Serialization,
}

impl GatewayError {
    /// HTTP status this failure terminates the request with.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Method(_) => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::Fetch(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Extract(_) | GatewayError::Normalize(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
