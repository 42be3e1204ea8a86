// tests/support/mocks/identity.rs
use async_trait::async_trait;
use tubular_core::application::error::ApplicationResult;
use tubular_core::application::ports::identity::IdentityProvider;
use tubular_core::domain::user::ExternalId;

pub const BAD_TOKEN: &str = "bad-token";

/// Identity provider double that treats the bearer token itself as the
/// provider subject, except for the designated unverifiable token.
pub struct TokenAsSubjectIdentityProvider;

#[async_trait]
impl IdentityProvider for TokenAsSubjectIdentityProvider {
    async fn resolve(&self, session_token: &str) -> ApplicationResult<Option<ExternalId>> {
        if session_token == BAD_TOKEN {
            return Ok(None);
        }
        Ok(ExternalId::new(session_token).ok())
    }
}
