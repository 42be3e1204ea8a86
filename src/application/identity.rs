// src/application/identity.rs
//! Helpers for threading the (possibly anonymous) caller identity into
//! services as an explicit value rather than ambient state.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::{ExternalId, User, UserId, UserRepository};

/// Resolve an optional caller subject to an internal user id. An anonymous
/// caller, or a subject with no matching user row, yields `None`; read
/// models treat both as "no viewer", never as an error.
pub(crate) async fn resolve_viewer(
    user_repo: &dyn UserRepository,
    viewer: Option<&ExternalId>,
) -> ApplicationResult<Option<UserId>> {
    let Some(external_id) = viewer else {
        return Ok(None);
    };

    let user = user_repo.find_by_external_id(external_id).await?;
    Ok(user.map(|user| user.id))
}

/// Resolve a caller subject that an operation requires, rejecting anonymous
/// callers and subjects the identity provider knows but this system has
/// never seen.
pub(crate) async fn require_caller(
    user_repo: &dyn UserRepository,
    caller: Option<&ExternalId>,
) -> ApplicationResult<User> {
    let external_id =
        caller.ok_or_else(|| ApplicationError::unauthorized("authentication required"))?;

    user_repo
        .find_by_external_id(external_id)
        .await?
        .ok_or_else(|| ApplicationError::unauthorized("unknown caller identity"))
}
