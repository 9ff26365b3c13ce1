//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Check the upstream URL is a usable http(s) endpoint
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;
use url::Url;

use crate::config::schema::GatewayConfig;

/// One semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a loaded configuration for semantic problems.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".to_string(),
            message: format!("not a socket address: {:?}", config.listener.bind_address),
        });
    }
    if config.listener.request_timeout_ms == 0 {
        errors.push(ValidationError {
            field: "listener.request_timeout_ms".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: "upstream.url".to_string(),
            message: format!("unsupported scheme {:?}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "upstream.url".to_string(),
            message: format!("not a URL: {}", e),
        }),
    }
    if config.upstream.connect_timeout_ms == 0 {
        errors.push(ValidationError {
            field: "upstream.connect_timeout_ms".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if config.upstream.request_timeout_ms == 0 {
        errors.push(ValidationError {
            field: "upstream.request_timeout_ms".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.device.name.trim().is_empty() {
        errors.push(ValidationError {
            field: "device.name".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
