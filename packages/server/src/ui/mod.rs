//! HTTP chat server implementation.

pub mod error;
pub mod extractor;
mod handler;
mod server;
mod signal;
pub mod state;
pub mod sweeper;

pub use server::{Server, build_router};
pub use signal::shutdown_signal;
