use super::CommentCommandService;
use crate::application::{
    dto::CommentDto,
    error::{ApplicationError, ApplicationResult},
    identity::require_caller,
};
use crate::domain::comment::{CommentBody, CommentId, CommentWithStats, NewComment};
use crate::domain::user::ExternalId;
use crate::domain::video::VideoId;

pub struct CreateCommentCommand {
    pub video_id: String,
    pub parent_id: Option<String>,
    pub body: String,
}

impl CommentCommandService {
    pub async fn create(
        &self,
        caller: Option<&ExternalId>,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let video_id = VideoId::parse(&command.video_id)?;
        let parent_id = command
            .parent_id
            .as_deref()
            .map(CommentId::parse)
            .transpose()?;
        let body = CommentBody::new(command.body)?;
        let caller = require_caller(self.user_repo.as_ref(), caller).await?;

        self.video_repo
            .find_by_id(video_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        if let Some(parent_id) = parent_id {
            let parent = self
                .comment_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("parent comment not found"))?;

            if parent.video_id != video_id {
                return Err(ApplicationError::validation(
                    "parent comment belongs to a different video",
                ));
            }
            // Replies are single-level.
            if parent.parent_id.is_some() {
                return Err(ApplicationError::validation("cannot reply to a reply"));
            }
        }

        let comment = self
            .comment_repo
            .insert(NewComment {
                video_id,
                author_id: caller.id,
                parent_id,
                body,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::debug!(comment = %comment.id, video = %video_id, "comment created");

        Ok(CommentWithStats {
            comment,
            author: caller,
            like_count: 0,
            dislike_count: 0,
            reply_count: 0,
            viewer_reaction: None,
        }
        .into())
    }
}
