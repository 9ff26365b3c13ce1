//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, method gate, pipeline orchestration)
//!     → [upstream fetch, extraction, normalization]
//!     → response.rs (compose JSON, stamp headers)
//!     → send to client, close connection
//! ```

pub mod response;
pub mod server;

pub use server::GatewayServer;
