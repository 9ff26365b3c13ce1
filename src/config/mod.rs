//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML, named by METER_GATEWAY_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields default to the stock deployment constants, so the
//!   zero-configuration process surface still holds
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_or_default, ConfigError, CONFIG_ENV_VAR};
pub use schema::{DeviceConfig, GatewayConfig, ListenerConfig, UpstreamConfig};
