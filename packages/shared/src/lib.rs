//! Shared utilities for Parlor.
//!
//! Logging setup and the clock abstraction used by the server.

pub mod logger;
pub mod time;
