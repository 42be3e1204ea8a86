// src/presentation/http/controllers/subscriptions.rs
use crate::application::commands::subscriptions::{SubscribeCommand, UnsubscribeCommand};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Identified;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/subscribe",
    params(("id" = String, Path, description = "Creator user id (UUID).")),
    responses(
        (status = 200, description = "Subscription created."),
        (status = 400, description = "Malformed id or self-subscription.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller is not identified.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such creator.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Already subscribed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("session_token" = [])),
    tag = "Subscriptions"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Identified(caller): Identified,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .subscription_commands
        .subscribe(Some(&caller), SubscribeCommand { creator_id: id })
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "status": "subscribed" })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/subscribe",
    params(("id" = String, Path, description = "Creator user id (UUID).")),
    responses(
        (status = 200, description = "Subscription removed."),
        (status = 401, description = "Caller is not identified.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such subscription.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("session_token" = [])),
    tag = "Subscriptions"
)]
pub async fn unsubscribe(
    Extension(state): Extension<HttpState>,
    Identified(caller): Identified,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .subscription_commands
        .unsubscribe(Some(&caller), UnsubscribeCommand { creator_id: id })
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "status": "unsubscribed" })))
}
