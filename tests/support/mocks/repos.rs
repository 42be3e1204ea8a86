// tests/support/mocks/repos.rs
//
// An in-memory persistence double that backs every repository trait at once.
// It mirrors the scoped-predicate semantics of the SQL implementations: an
// absent viewer matches zero subscription and reaction rows.
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use tubular_core::domain::comment::{
    Comment, CommentId, CommentListCursor, CommentReactionRepository, CommentRepository,
    CommentWithStats, NewComment, ReactionKind,
};
use tubular_core::domain::errors::{DomainError, DomainResult};
use tubular_core::domain::subscription::{NewSubscription, Subscription, SubscriptionRepository};
use tubular_core::domain::user::{ExternalId, User, UserId, UserProfile, UserRepository};
use tubular_core::domain::video::{Video, VideoId, VideoRepository};

#[derive(Clone)]
struct ReactionRow {
    comment_id: CommentId,
    user_id: UserId,
    kind: ReactionKind,
}

#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    videos: Mutex<Vec<Video>>,
    subscriptions: Mutex<Vec<Subscription>>,
    comments: Mutex<Vec<Comment>>,
    reactions: Mutex<Vec<ReactionRow>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_user(&self, user: User) -> UserId {
        let id = user.id;
        self.users.lock().unwrap().push(user);
        id
    }

    pub fn add_video(&self, video: Video) -> VideoId {
        let id = video.id;
        self.videos.lock().unwrap().push(video);
        id
    }

    /// Returns `true` when a row was removed.
    pub fn remove_video(&self, id: VideoId) -> bool {
        let mut videos = self.videos.lock().unwrap();
        let before = videos.len();
        videos.retain(|v| v.id != id);
        videos.len() != before
    }

    pub fn add_subscription(
        &self,
        subscriber_id: UserId,
        creator_id: UserId,
        created_at: DateTime<Utc>,
    ) {
        self.subscriptions.lock().unwrap().push(Subscription {
            subscriber_id,
            creator_id,
            created_at,
        });
    }

    pub fn add_comment(
        &self,
        video_id: VideoId,
        author_id: UserId,
        parent_id: Option<CommentId>,
        body: tubular_core::domain::comment::CommentBody,
        created_at: DateTime<Utc>,
    ) -> Comment {
        let comment = Comment {
            id: CommentId::new(Uuid::new_v4()),
            video_id,
            author_id,
            parent_id,
            body,
            created_at,
            updated_at: created_at,
        };
        self.comments.lock().unwrap().push(comment.clone());
        comment
    }

    pub fn add_reaction(&self, comment_id: CommentId, user_id: UserId, kind: ReactionKind) {
        self.reactions.lock().unwrap().push(ReactionRow {
            comment_id,
            user_id,
            kind,
        });
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.lock().unwrap().len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }
}

fn as_count(n: usize) -> u64 {
    u64::try_from(n).unwrap()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_external_id(&self, external_id: &ExternalId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.external_id == *external_id)
            .cloned())
    }

    async fn find_profile(
        &self,
        target: UserId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<UserProfile>> {
        let Some(user) = UserRepository::find_by_id(self, target).await? else {
            return Ok(None);
        };

        let subscriptions = self.subscriptions.lock().unwrap();
        let viewer_subscribed = viewer.is_some_and(|v| {
            subscriptions
                .iter()
                .any(|s| s.creator_id == target && s.subscriber_id == v)
        });
        let subscriber_count =
            as_count(subscriptions.iter().filter(|s| s.creator_id == target).count());
        drop(subscriptions);

        let video_count = as_count(
            self.videos
                .lock()
                .unwrap()
                .iter()
                .filter(|v| v.owner_id == target)
                .count(),
        );

        Ok(Some(UserProfile {
            user,
            viewer_subscribed,
            video_count,
            subscriber_count,
        }))
    }
}

#[async_trait]
impl VideoRepository for InMemoryStore {
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<Video>> {
        Ok(self.videos.lock().unwrap().iter().find(|v| v.id == id).cloned())
    }

    async fn find_owned(&self, id: VideoId, owner: UserId) -> DomainResult<Option<Video>> {
        Ok(self
            .videos
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id && v.owner_id == owner)
            .cloned())
    }

    async fn count_by_owner(&self, owner: UserId) -> DomainResult<u64> {
        Ok(as_count(
            self.videos
                .lock()
                .unwrap()
                .iter()
                .filter(|v| v.owner_id == owner)
                .count(),
        ))
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn insert(&self, new_subscription: NewSubscription) -> DomainResult<Subscription> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        let duplicate = subscriptions.iter().any(|s| {
            s.subscriber_id == new_subscription.subscriber_id
                && s.creator_id == new_subscription.creator_id
        });
        if duplicate {
            return Err(DomainError::Conflict("subscription already exists".into()));
        }

        let subscription = Subscription {
            subscriber_id: new_subscription.subscriber_id,
            creator_id: new_subscription.creator_id,
            created_at: new_subscription.created_at,
        };
        subscriptions.push(subscription.clone());
        Ok(subscription)
    }

    async fn delete(&self, subscriber_id: UserId, creator_id: UserId) -> DomainResult<bool> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        let before = subscriptions.len();
        subscriptions
            .retain(|s| !(s.subscriber_id == subscriber_id && s.creator_id == creator_id));
        Ok(subscriptions.len() != before)
    }

    async fn exists(&self, subscriber_id: UserId, creator_id: UserId) -> DomainResult<bool> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.subscriber_id == subscriber_id && s.creator_id == creator_id))
    }

    async fn count_for_creator(&self, creator_id: UserId) -> DomainResult<u64> {
        Ok(as_count(
            self.subscriptions
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.creator_id == creator_id)
                .count(),
        ))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, new_comment: NewComment) -> DomainResult<Comment> {
        let comment = Comment {
            id: CommentId::new(Uuid::new_v4()),
            video_id: new_comment.video_id,
            author_id: new_comment.author_id,
            parent_id: new_comment.parent_id,
            body: new_comment.body,
            created_at: new_comment.created_at,
            updated_at: new_comment.created_at,
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn delete_authored(&self, id: CommentId, author_id: UserId) -> DomainResult<bool> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| !(c.id == id && c.author_id == author_id));
        Ok(comments.len() != before)
    }

    async fn list_page(
        &self,
        video_id: VideoId,
        parent_id: Option<CommentId>,
        viewer: Option<UserId>,
        limit: u32,
        cursor: Option<CommentListCursor>,
    ) -> DomainResult<(Vec<CommentWithStats>, Option<CommentListCursor>)> {
        let all_comments = self.comments.lock().unwrap().clone();
        let users = self.users.lock().unwrap().clone();
        let reactions = self.reactions.lock().unwrap().clone();

        let mut rows: Vec<Comment> = all_comments
            .iter()
            .filter(|c| c.video_id == video_id && c.parent_id == parent_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id.as_uuid()).cmp(&(a.created_at, a.id.as_uuid())));

        if let Some(cursor) = cursor {
            rows.retain(|c| (c.created_at, c.id.as_uuid()) < (cursor.created_at, cursor.id.as_uuid()));
        }

        let limit = usize::try_from(limit).unwrap();
        let has_more = rows.len() > limit;
        rows.truncate(limit);

        let next_cursor = if has_more {
            rows.last().map(|c| CommentListCursor {
                created_at: c.created_at,
                id: c.id,
            })
        } else {
            None
        };

        let mut page = Vec::with_capacity(rows.len());
        for comment in rows {
            let author = users
                .iter()
                .find(|u| u.id == comment.author_id)
                .cloned()
                .ok_or_else(|| DomainError::Persistence("comment author missing".into()))?;

            let like_count = as_count(
                reactions
                    .iter()
                    .filter(|r| r.comment_id == comment.id && r.kind == ReactionKind::Like)
                    .count(),
            );
            let dislike_count = as_count(
                reactions
                    .iter()
                    .filter(|r| r.comment_id == comment.id && r.kind == ReactionKind::Dislike)
                    .count(),
            );
            let reply_count = as_count(
                all_comments
                    .iter()
                    .filter(|c| c.parent_id == Some(comment.id))
                    .count(),
            );
            let viewer_reaction = viewer.and_then(|v| {
                reactions
                    .iter()
                    .find(|r| r.comment_id == comment.id && r.user_id == v)
                    .map(|r| r.kind)
            });

            page.push(CommentWithStats {
                comment,
                author,
                like_count,
                dislike_count,
                reply_count,
                viewer_reaction,
            });
        }

        Ok((page, next_cursor))
    }
}

#[async_trait]
impl CommentReactionRepository for InMemoryStore {
    async fn find_kind(
        &self,
        comment_id: CommentId,
        user_id: UserId,
    ) -> DomainResult<Option<ReactionKind>> {
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.comment_id == comment_id && r.user_id == user_id)
            .map(|r| r.kind))
    }

    async fn upsert(
        &self,
        comment_id: CommentId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> DomainResult<()> {
        let mut reactions = self.reactions.lock().unwrap();
        if let Some(existing) = reactions
            .iter_mut()
            .find(|r| r.comment_id == comment_id && r.user_id == user_id)
        {
            existing.kind = kind;
        } else {
            reactions.push(ReactionRow {
                comment_id,
                user_id,
                kind,
            });
        }
        Ok(())
    }

    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> DomainResult<bool> {
        let mut reactions = self.reactions.lock().unwrap();
        let before = reactions.len();
        reactions.retain(|r| !(r.comment_id == comment_id && r.user_id == user_id));
        Ok(reactions.len() != before)
    }
}

/// Wrapper that counts storage calls, used to show that malformed input is
/// rejected before any repository access.
pub struct InstrumentedUserRepo {
    inner: Arc<InMemoryStore>,
    calls: AtomicUsize,
}

impl InstrumentedUserRepo {
    pub fn new(inner: Arc<InMemoryStore>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InstrumentedUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        UserRepository::find_by_id(self.inner.as_ref(), id).await
    }

    async fn find_by_external_id(&self, external_id: &ExternalId) -> DomainResult<Option<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_external_id(external_id).await
    }

    async fn find_profile(
        &self,
        target: UserId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<UserProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_profile(target, viewer).await
    }
}
