// src/domain/video/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Video;
pub use repository::VideoRepository;
pub use value_objects::VideoId;
