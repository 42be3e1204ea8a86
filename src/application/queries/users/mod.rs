mod get_one;
mod service;

pub use get_one::GetUserQuery;
pub use service::UserQueryService;
