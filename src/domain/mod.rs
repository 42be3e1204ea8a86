pub mod comment;
pub mod errors;
pub mod subscription;
pub mod user;
pub mod video;
