pub mod comments;
pub mod pagination;
pub mod serde_time;
pub mod users;
pub mod videos;

pub use comments::{CommentDto, ReactionKindDto};
pub use pagination::CursorPage;
pub use users::{UserDto, UserProfileDto};
pub use videos::VideoDto;
