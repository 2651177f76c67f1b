//! Domain factories for creating domain entities and value objects.

use super::DocumentId;

/// Factory for generating DocumentId instances.
///
/// Keeps id generation apart from the value object itself.
pub struct DocumentIdFactory;

impl DocumentIdFactory {
    /// Generate a new DocumentId with a random UUID v4.
    pub fn generate() -> DocumentId {
        DocumentId::from_uuid(uuid::Uuid::new_v4())
    }
}
