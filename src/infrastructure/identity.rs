// src/infrastructure/identity.rs
//! Verification of session tokens minted by the external identity provider.
//!
//! A token is `base64url(subject) "." base64url(hmac_sha256(secret, subject))`.
//! The provider holds the same shared secret; this side only verifies. It
//! never mints tokens or manages sessions.
use crate::application::error::ApplicationResult;
use crate::application::ports::identity::IdentityProvider;
use crate::domain::user::ExternalId;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub struct HmacIdentityProvider {
    secret: Vec<u8>,
}

impl HmacIdentityProvider {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn verify(&self, session_token: &str) -> Option<ExternalId> {
        let (subject_raw, signature_raw) = session_token.split_once('.')?;

        let subject = URL_SAFE_NO_PAD.decode(subject_raw).ok()?;
        let signature = URL_SAFE_NO_PAD.decode(signature_raw).ok()?;

        let mut mac = HmacSha256::new_from_slice(&self.secret).ok()?;
        mac.update(&subject);
        mac.verify_slice(&signature).ok()?;

        let subject = String::from_utf8(subject).ok()?;
        ExternalId::new(subject).ok()
    }
}

#[async_trait]
impl IdentityProvider for HmacIdentityProvider {
    /// An unverifiable token resolves to `None`: the caller is simply
    /// anonymous. Identified-only endpoints turn that into 401 at the
    /// extractor.
    async fn resolve(&self, session_token: &str) -> ApplicationResult<Option<ExternalId>> {
        Ok(self.verify(session_token))
    }
}

/// Token minting counterpart used by tests and local tooling; production
/// tokens come from the identity provider itself.
pub fn sign_session_token(secret: &[u8], subject: &str) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(subject.as_bytes());
    let signature = mac.finalize().into_bytes();

    Some(format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(subject.as_bytes()),
        URL_SAFE_NO_PAD.encode(signature)
    ))
}
