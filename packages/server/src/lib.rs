//! Chat room server library.
//!
//! Participants register a name, post public or private messages, send
//! heartbeats, and are swept out after a period of inactivity.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub use config::ServerConfig;
pub use ui::Server;
