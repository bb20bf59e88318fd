// src/infrastructure/security/mod.rs
pub mod claims;
pub mod verifier;

pub use verifier::BiscuitTokenVerifier;
