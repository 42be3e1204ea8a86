// src/presentation/http/openapi.rs
use crate::application::dto::{
    CommentDto, CursorPage, ReactionKindDto, UserDto, UserProfileDto, VideoDto,
};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::subscriptions::subscribe,
        crate::presentation::http::controllers::subscriptions::unsubscribe,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::remove_comment,
        crate::presentation::http::controllers::comments::like_comment,
        crate::presentation::http::controllers::comments::dislike_comment,
        crate::presentation::http::controllers::videos::get_studio_video,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            UserDto,
            UserProfileDto,
            VideoDto,
            CommentDto,
            ReactionKindDto,
            CursorPage<CommentDto>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Service status."),
        (name = "Users", description = "Public profile reads."),
        (name = "Subscriptions", description = "Creator subscriptions."),
        (name = "Comments", description = "Video comment threads."),
        (name = "Studio", description = "Creator-facing reads.")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(Components::default);
        components.add_security_scheme(
            "session_token",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs/swagger").url("/docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/docs/redoc", ApiDoc::openapi()))
        .route("/docs", get(|| async { Redirect::permanent("/docs/swagger") }))
}
