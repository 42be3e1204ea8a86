// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, ReactToCommentCommand, RemoveCommentCommand},
    dto::{CommentDto, CursorPage},
    queries::comments::ListCommentsQuery,
};
use crate::domain::comment::ReactionKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Identified, MaybeIdentified};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

// `limit` stays a raw string here; the query service parses it so a
// malformed value gets the same JSON error envelope as a malformed id.
#[derive(Debug, Deserialize)]
pub struct ListCommentsParams {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCommentRequest {
    pub body: String,
    pub parent_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/videos/{id}/comments",
    params(
        ("id" = String, Path, description = "Video id (UUID)."),
        ("limit" = Option<String>, Query, description = "Page size, capped at 100."),
        ("cursor" = Option<String>, Query, description = "Opaque page cursor."),
        ("parent_id" = Option<String>, Query, description = "List replies of this comment instead of top-level comments.")
    ),
    responses(
        (status = 200, description = "One page of the video's comments.", body = CursorPage<CommentDto>),
        (status = 400, description = "Malformed id or cursor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("session_token" = [])),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    viewer: MaybeIdentified,
    Path(id): Path<String>,
    Query(params): Query<ListCommentsParams>,
) -> HttpResult<Json<CursorPage<CommentDto>>> {
    state
        .services
        .comment_queries
        .list(
            viewer.0.as_ref(),
            ListCommentsQuery {
                video_id: id,
                parent_id: params.parent_id,
                limit: params.limit,
                cursor: params.cursor,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/videos/{id}/comments",
    params(("id" = String, Path, description = "Video id (UUID).")),
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "The created comment.", body = CommentDto),
        (status = 400, description = "Malformed input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller is not identified.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such video or parent comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("session_token" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Identified(caller): Identified,
    Path(id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .create(
            Some(&caller),
            CreateCommentCommand {
                video_id: id,
                parent_id: payload.parent_id,
                body: payload.body,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment id (UUID).")),
    responses(
        (status = 200, description = "Comment deleted."),
        (status = 401, description = "Caller is not identified.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such comment authored by the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("session_token" = [])),
    tag = "Comments"
)]
pub async fn remove_comment(
    Extension(state): Extension<HttpState>,
    Identified(caller): Identified,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .remove(Some(&caller), RemoveCommentCommand { id })
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{id}/like",
    params(("id" = String, Path, description = "Comment id (UUID).")),
    responses(
        (status = 200, description = "Like toggled."),
        (status = 401, description = "Caller is not identified.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("session_token" = [])),
    tag = "Comments"
)]
pub async fn like_comment(
    Extension(state): Extension<HttpState>,
    Identified(caller): Identified,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    react(&state, &caller, id, ReactionKind::Like).await
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{id}/dislike",
    params(("id" = String, Path, description = "Comment id (UUID).")),
    responses(
        (status = 200, description = "Dislike toggled."),
        (status = 401, description = "Caller is not identified.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("session_token" = [])),
    tag = "Comments"
)]
pub async fn dislike_comment(
    Extension(state): Extension<HttpState>,
    Identified(caller): Identified,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    react(&state, &caller, id, ReactionKind::Dislike).await
}

async fn react(
    state: &HttpState,
    caller: &crate::domain::user::ExternalId,
    comment_id: String,
    kind: ReactionKind,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .react(Some(caller), ReactToCommentCommand { comment_id, kind })
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "status": "ok" })))
}
