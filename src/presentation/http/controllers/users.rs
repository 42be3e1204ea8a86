// src/presentation/http/controllers/users.rs
use crate::application::{dto::UserProfileDto, queries::users::GetUserQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeIdentified;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

/// Profile view for any user, enriched with the viewer-specific
/// subscription flag and the creator's video/subscriber counts.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Target user id (UUID).")),
    responses(
        (status = 200, description = "Profile view for the target user.", body = UserProfileDto),
        (status = 400, description = "Malformed user id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("session_token" = [])),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    viewer: MaybeIdentified,
    Path(id): Path<String>,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_one(viewer.0.as_ref(), GetUserQuery { id })
        .await
        .into_http()
        .map(Json)
}
