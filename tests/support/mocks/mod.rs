// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod identity;
pub mod repos;
pub mod time;

pub use identity::{BAD_TOKEN, TokenAsSubjectIdentityProvider};
pub use repos::{InMemoryStore, InstrumentedUserRepo};
pub use time::FixedClock;
