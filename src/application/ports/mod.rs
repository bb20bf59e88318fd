// src/application/ports/mod.rs
pub mod assistant;
pub mod mail;
pub mod rate_limit;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AssistantBackendPort = dyn assistant::AssistantBackend;
pub type ClockPort = dyn time::Clock;
pub type MailerPort = dyn mail::Mailer;
pub type RateLimiterPort = dyn rate_limit::ChatRateLimiter;
pub type TokenVerifierPort = dyn security::TokenVerifier;
