mod service;
mod subscribe;
mod unsubscribe;

pub use service::SubscriptionCommandService;
pub use subscribe::SubscribeCommand;
pub use unsubscribe::UnsubscribeCommand;
