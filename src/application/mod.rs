pub mod commands;
pub mod dto;
pub mod error;
pub(crate) mod identity;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
