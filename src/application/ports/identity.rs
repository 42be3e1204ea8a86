// src/application/ports/identity.rs
use crate::application::error::ApplicationResult;
use crate::domain::user::ExternalId;
use async_trait::async_trait;

/// Boundary to the external identity provider. A session token resolves to
/// the provider-issued subject, or to `None` when the token cannot be
/// verified; an anonymous caller is an ordinary input state, not an error.
/// `Err` is reserved for the provider being unreachable.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, session_token: &str) -> ApplicationResult<Option<ExternalId>>;
}
