// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, CommentWithStats, NewComment};
pub use repository::{CommentReactionRepository, CommentRepository};
pub use value_objects::{CommentBody, CommentId, CommentListCursor, ReactionKind};
