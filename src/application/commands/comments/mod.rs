mod create;
mod react;
mod remove;
mod service;

pub use create::CreateCommentCommand;
pub use react::ReactToCommentCommand;
pub use remove::RemoveCommentCommand;
pub use service::CommentCommandService;
