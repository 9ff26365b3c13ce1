//! Tasmota Meter Gateway
//!
//! A single-purpose HTTP gateway: it scrapes the status page of one
//! embedded smart-plug power meter and re-serves the measurements as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────────┐
//!                      │                 METER GATEWAY                   │
//!                      │                                                 │
//!  Client GET          │  ┌─────────┐   ┌──────────┐   ┌─────────────┐  │
//!  ────────────────────┼─▶│  http   │──▶│ upstream │──▶│   device    │──┼──▶ Tasmota
//!                      │  │ server  │   │ fetcher  │   │ status page │  │    plug
//!                      │  └────┬────┘   └──────────┘   └─────────────┘  │
//!                      │       │                                        │
//!                      │       ▼                                        │
//!                      │  ┌─────────┐   ┌───────────┐   ┌───────────┐   │
//!  Client JSON         │  │ compose │◀──│ normalize │◀──│  extract  │   │
//!  ◀───────────────────┼──│ (3 dp)  │   │ trim+parse│   │ label scan│   │
//!                      │  └─────────┘   └───────────┘   └───────────┘   │
//!                      │                                                 │
//!                      │  cross-cutting: config, error taxonomy,         │
//!                      │  lifecycle (signals, graceful shutdown)         │
//!                      └────────────────────────────────────────────────┘
//! ```
//!
//! Control flow is strictly linear per request, and requests share no
//! mutable state; the first failing stage maps directly to a terminal
//! HTTP response.

// Core pipeline
pub mod extract;
pub mod http;
pub mod normalize;
pub mod upstream;

// Cross-cutting concerns
pub mod config;
pub mod error;
pub mod lifecycle;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
