// src/application/ports/mod.rs
pub mod identity;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type IdentityProviderPort = dyn identity::IdentityProvider;
pub type ClockPort = dyn time::Clock;
