// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::user::ExternalId,
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Resolved caller identity for endpoints that work for anonymous callers
/// too. Absent header and unverifiable token both read as anonymous.
#[derive(Debug, Clone)]
pub struct MaybeIdentified(pub Option<ExternalId>);

/// Resolved caller identity for endpoints that require one.
#[derive(Debug, Clone)]
pub struct Identified(pub ExternalId);

async fn resolve_from_parts<S>(parts: &mut Parts, state: &S) -> Result<Option<ExternalId>, HttpError>
where
    S: Send + Sync,
{
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;

    let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };

    let provider = app_state.services.identity_provider();
    provider
        .resolve(header.token())
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for MaybeIdentified
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        resolve_from_parts(parts, state).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for Identified
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = resolve_from_parts(parts, state).await?;
        identity.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::Unauthorized(
                "a valid session token is required".into(),
            ))
        })
    }
}
