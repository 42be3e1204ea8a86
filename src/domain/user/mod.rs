// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{User, UserProfile};
pub use repository::UserRepository;
pub use value_objects::{DisplayName, ExternalId, UserId};
