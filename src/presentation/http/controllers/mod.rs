// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod subscriptions;
pub mod users;
pub mod videos;
