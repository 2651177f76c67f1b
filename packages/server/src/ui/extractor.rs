//! Request extractors.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the caller's participant name.
pub const CALLER_IDENTITY_HEADER: &str = "user";

/// Caller identity as claimed by the `User` header.
///
/// Taken at face value: nothing here checks it against the registry.
/// Missing or non UTF-8 headers yield `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub Option<String>);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get(CALLER_IDENTITY_HEADER)
            .and_then(|value| String::from_utf8(value.as_bytes().to_vec()).ok());
        Ok(Self(name))
    }
}
