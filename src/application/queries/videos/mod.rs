mod get_owned;
mod service;

pub use get_owned::GetOwnedVideoQuery;
pub use service::VideoQueryService;
