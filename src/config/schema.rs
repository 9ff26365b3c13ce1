//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from an optional TOML
//! file. Every field has a default reproducing the stock deployment, so the
//! gateway runs with no configuration at all.

use serde::{Deserialize, Serialize};

/// Root configuration for the meter gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, inbound ceiling).
    pub listener: ListenerConfig,

    /// Upstream device endpoint and fetch bounds.
    pub upstream: UpstreamConfig,

    /// How the device presents itself in responses.
    pub device: DeviceConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:7270").
    pub bind_address: String,

    /// Inbound request ceiling in milliseconds, enforced as middleware.
    /// Sized above the upstream total timeout so the fetch bound fires first.
    pub request_timeout_ms: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:7270".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// Upstream device endpoint and fetch bounds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Status page URL of the device.
    pub url: String,

    /// Connection establishment ceiling in milliseconds.
    pub connect_timeout_ms: u64,

    /// Whole-request ceiling in milliseconds. Not retried on expiry.
    pub request_timeout_ms: u64,

    /// Redirect hops followed before the fetch fails.
    pub max_redirects: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "http://192.168.1.124/?m=1".to_string(),
            connect_timeout_ms: 2_000,
            request_timeout_ms: 3_000,
            max_redirects: 5,
        }
    }
}

/// Identity echoed in successful responses and the upstream User-Agent.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Display name of the monitored device.
    pub name: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self { name: "Tasmota Tiny-Monitor".to_string() }
    }
}
