// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_comment;
mod postgres_subscription;
mod postgres_user;
mod postgres_video;

pub(crate) use error::map_sqlx;
pub use postgres_comment::{PostgresCommentReactionRepository, PostgresCommentRepository};
pub use postgres_subscription::PostgresSubscriptionRepository;
pub use postgres_user::PostgresUserRepository;
pub use postgres_video::PostgresVideoRepository;
