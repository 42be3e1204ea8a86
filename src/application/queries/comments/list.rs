use super::CommentQueryService;
use crate::application::{
    dto::{CommentDto, CursorPage},
    error::{ApplicationError, ApplicationResult},
    identity::resolve_viewer,
};
use crate::domain::comment::{CommentId, CommentListCursor};
use crate::domain::user::ExternalId;
use crate::domain::video::VideoId;

pub struct ListCommentsQuery {
    pub video_id: String,
    pub parent_id: Option<String>,
    /// Raw page size; parsed here like the ids so malformed values surface
    /// through the same error envelope.
    pub limit: Option<String>,
    pub cursor: Option<String>,
}

impl CommentQueryService {
    /// Cursor-paged comment read model. The per-row `viewer_reaction` uses
    /// the same scoped predicate as the profile aggregator: an anonymous
    /// viewer matches zero reaction rows.
    pub async fn list(
        &self,
        viewer: Option<&ExternalId>,
        query: ListCommentsQuery,
    ) -> ApplicationResult<CursorPage<CommentDto>> {
        let video_id = VideoId::parse(&query.video_id)?;
        let parent_id = query
            .parent_id
            .as_deref()
            .map(CommentId::parse)
            .transpose()?;
        let limit = parse_limit(query.limit.as_deref())?;
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let viewer_id = resolve_viewer(self.user_repo.as_ref(), viewer).await?;

        let (rows, next_cursor) = self
            .comment_repo
            .list_page(video_id, parent_id, viewer_id, limit, cursor)
            .await?;

        let items = rows.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}

fn parse_limit(raw: Option<&str>) -> ApplicationResult<u32> {
    const DEFAULT_LIMIT: u32 = 20;
    const MAX_LIMIT: u32 = 100;

    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };

    let limit: u32 = raw.parse().map_err(|_| {
        ApplicationError::validation(format!("'{raw}' is not a valid page size"))
    })?;

    Ok(if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    })
}

fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<CommentListCursor>> {
    match token {
        Some(value) => CommentListCursor::decode(value)
            .map(Some)
            .map_err(ApplicationError::from),
        None => Ok(None),
    }
}
