//! Process lifecycle subsystem.
//!
//! Startup is trivial (bind, then serve); the interesting part is stopping:
//! an interrupt moves the server from accepting to draining, and the
//! in-flight request is already bounded by the upstream fetch timeout, so
//! nothing needs to be aborted.

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::interrupt;
