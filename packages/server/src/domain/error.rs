//! Domain layer error definitions.

use std::fmt;

use thiserror::Error;

/// Errors related to Value Objects validation
///
/// Messages follow the `"<field>" ...` form clients already parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Field was not supplied at all
    #[error("\"{field}\" is required")]
    Required { field: &'static str },

    /// Field was supplied as an empty string
    #[error("\"{field}\" is not allowed to be empty")]
    Empty { field: &'static str },

    /// Field is shorter than its minimum length
    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    /// Message kind is not one that participants may post
    #[error("\"{field}\" must be one of [message, private_message]")]
    InvalidMessageKind { field: &'static str, value: String },

    /// Limit is not a non-negative integer
    #[error("\"{field}\" must be a non-negative integer")]
    InvalidLimit { field: &'static str, value: String },

    /// Sender is not in the participant registry
    #[error("\"{field}\" must be a registered participant")]
    UnregisteredSender { field: &'static str },
}

/// Every field-level failure found while validating one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<ValueObjectError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValueObjectError) {
        self.0.push(error);
    }

    /// Record the error side of `result` and hand back the success side.
    pub fn collect<T>(&mut self, result: Result<T, ValueObjectError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }

    /// Human readable messages, one per failing field.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl From<ValueObjectError> for ValidationErrors {
    fn from(error: ValueObjectError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(". "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A participant with the same name already exists
    #[error("Participant already exists: {0}")]
    ParticipantAlreadyExists(String),

    /// Participant lookup failed
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    /// Backing store could not serve the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
