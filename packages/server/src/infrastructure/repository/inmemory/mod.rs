//! In-memory document store.
//!
//! Each repository guards its collection with a single `tokio::sync::Mutex`,
//! so every trait method is atomic on its own.

mod message;
mod participant;

pub use message::InMemoryMessageRepository;
pub use participant::InMemoryParticipantRepository;
