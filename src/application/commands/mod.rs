pub mod comments;
pub mod subscriptions;
