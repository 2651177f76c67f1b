//! Handler modules for the HTTP endpoints.

pub mod http;
pub mod message;
pub mod participant;
pub mod status;

pub use http::health_check;
pub use message::{list_messages, post_message};
pub use participant::{list_participants, register_participant};
pub use status::heartbeat;
