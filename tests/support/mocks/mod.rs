// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assistant;
pub mod mail;
pub mod security;
pub mod store;
pub mod time;

pub use assistant::{Script, ScriptedBackend};
pub use mail::{CapturingMailer, FailingMailer, HangingMailer};
pub use security::TestIdentityProvider;
pub use store::InMemoryStore;
pub use time::{ManualClock, fixed_now};
