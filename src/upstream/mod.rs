//! Upstream device access subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → fetcher.rs (one bounded GET against the device status page)
//!     → raw page bytes, handed to the extractor
//! ```
//!
//! # Design Decisions
//! - Exactly one fetch attempt per inbound request; the timeouts are the
//!   only bound on a hung device, there is no retry or backoff
//! - Redirects are followed up to a small fixed cap to survive the device's
//!   occasional captive-portal style redirect without looping

pub mod fetcher;

pub use fetcher::{FetchError, FetchInitError, Fetcher};
