// src/presentation/http/controllers/videos.rs
use crate::application::{dto::VideoDto, queries::videos::GetOwnedVideoQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Identified;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

/// Studio read: the caller fetches one of their own videos. Videos owned by
/// someone else read as absent.
#[utoipa::path(
    get,
    path = "/api/v1/studio/videos/{id}",
    params(("id" = String, Path, description = "Video id (UUID).")),
    responses(
        (status = 200, description = "The caller's video.", body = VideoDto),
        (status = 400, description = "Malformed video id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller is not identified.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such video owned by the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("session_token" = [])),
    tag = "Studio"
)]
pub async fn get_studio_video(
    Extension(state): Extension<HttpState>,
    Identified(caller): Identified,
    Path(id): Path<String>,
) -> HttpResult<Json<VideoDto>> {
    state
        .services
        .video_queries
        .get_owned(Some(&caller), GetOwnedVideoQuery { id })
        .await
        .into_http()
        .map(Json)
}
