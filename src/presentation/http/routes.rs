// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{comments, subscriptions, users, videos},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Tests disable the rate limiter so request bursts in a single test binary
/// are not throttled.
pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limit: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/users/{id}", get(users::get_user))
        .route(
            "/api/v1/users/{id}/subscribe",
            post(subscriptions::subscribe).delete(subscriptions::unsubscribe),
        )
        .route(
            "/api/v1/videos/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/v1/comments/{id}",
            axum::routing::delete(comments::remove_comment),
        )
        .route("/api/v1/comments/{id}/like", post(comments::like_comment))
        .route(
            "/api/v1/comments/{id}/dislike",
            post(comments::dislike_comment),
        )
        .route("/api/v1/studio/videos/{id}", get(videos::get_studio_video));

    let router = if enable_rate_limit {
        router.layer(rate_limit_layer())
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
