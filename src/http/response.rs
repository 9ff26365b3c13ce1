//! Response composition.
//!
//! # Responsibilities
//! - Render a meter reading as the gateway's JSON body
//! - Map pipeline failures to their fixed error bodies
//! - Stamp the protocol headers every response carries
//!
//! # Design Decisions
//! - The success body is rendered by hand into a bounded buffer: the wire
//!   contract fixes three decimal digits per number and emits the state
//!   token verbatim, neither of which serde_json expresses
//! - The state string is not JSON-escaped; the device vocabulary is a
//!   short fixed set (ON/OFF), so this is an accepted limitation
//! - Every response closes the connection and forbids caching

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt::Write;

use crate::error::GatewayError;
use crate::normalize::MeterReading;

/// Ceiling for the rendered success body. Overflow is a serialization
/// failure, not a truncated response.
pub const MAX_BODY_BYTES: usize = 1024;

/// Shape of every error body: an `error` key, sometimes a `detail` key.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'static str>,
}

impl GatewayError {
    fn body(&self) -> ErrorBody {
        match self {
            GatewayError::Method(_) => ErrorBody { error: "method not allowed", detail: None },
            GatewayError::Fetch(_) => {
                ErrorBody { error: "bad gateway", detail: Some("fetch failed") }
            }
            GatewayError::Extract(_) | GatewayError::Normalize(_) => {
                ErrorBody { error: "parse failure", detail: None }
            }
            GatewayError::Serialization => {
                ErrorBody { error: "serialization failure", detail: None }
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = serde_json::to_string(&self.body())
            .unwrap_or_else(|_| r#"{"error":"serialization failure"}"#.to_string());
        json_response(self.status(), body)
    }
}

/// Render the success body: every number with exactly three decimal digits,
/// the state token verbatim.
pub fn render_reading(
    reading: &MeterReading,
    name: &str,
    source: &str,
) -> Result<String, GatewayError> {
    let mut body = String::with_capacity(MAX_BODY_BYTES);
    // Writing to a String is infallible; the bound is checked after rendering.
    let _ = write!(
        body,
        concat!(
            "{{",
            "\"name\":\"{}\",",
            "\"voltage\":{:.3},",
            "\"current\":{:.3},",
            "\"active_power\":{:.3},",
            "\"apparent_power\":{:.3},",
            "\"reactive_power\":{:.3},",
            "\"power_factor\":{:.3},",
            "\"energy_today_kwh\":{:.3},",
            "\"energy_yesterday_kwh\":{:.3},",
            "\"energy_total_kwh\":{:.3},",
            "\"state\":\"{}\",",
            "\"source\":\"{}\"",
            "}}"
        ),
        name,
        reading.voltage,
        reading.current,
        reading.active_power,
        reading.apparent_power,
        reading.reactive_power,
        reading.power_factor,
        reading.energy_today,
        reading.energy_yesterday,
        reading.energy_total,
        reading.state,
        source,
    );
    if body.len() > MAX_BODY_BYTES {
        return Err(GatewayError::Serialization);
    }
    Ok(body)
}

/// Wrap a JSON body with the headers every gateway response carries.
pub fn json_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONNECTION, "close"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
        .into_response()
}
