// tests/support/builders.rs
use std::sync::Arc;
use std::time::Duration;

use campuscare_core::application::{
    commands::chat::ChatSettings,
    ports::{assistant::AssistantBackend, mail::Mailer},
    services::{ApplicationServices, ServiceSettings},
};
use campuscare_core::domain::user::{Role, User, UserId, Username};
use campuscare_core::infrastructure::rate_limit::SlidingWindowRateLimiter;
use campuscare_core::presentation::http::state::HttpState;

use super::helpers::seed_directory;
use super::mocks::{CapturingMailer, InMemoryStore, ManualClock, TestIdentityProvider, fixed_now};

pub struct UserBuilder {
    id: i64,
    username: String,
    email: Option<String>,
    role: Role,
    is_active: bool,
}

impl UserBuilder {
    pub fn new(id: i64, role: Role) -> Self {
        Self {
            id,
            username: format!("user{id}"),
            email: Some(format!("user{id}@campus.test")),
            role,
            is_active: true,
        }
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = username.into();
        self
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: self.email,
            role: self.role,
            is_active: self.is_active,
            created_at: fixed_now(),
        }
    }
}

/// Everything a test needs to drive the services and inspect their effects.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
    pub mailer: Arc<CapturingMailer>,
    pub clock: Arc<ManualClock>,
    pub identity: Arc<TestIdentityProvider>,
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder::default()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn http_state(&self) -> HttpState {
        HttpState {
            services: Arc::clone(&self.services),
        }
    }
}

pub struct TestAppBuilder {
    chat_enabled: bool,
    backends: Vec<Arc<dyn AssistantBackend>>,
    backend_timeout: Duration,
    mailer: Option<Arc<dyn Mailer>>,
    email_timeout: Duration,
    rate_limit_max: usize,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            chat_enabled: true,
            backends: Vec::new(),
            backend_timeout: Duration::from_millis(200),
            mailer: None,
            email_timeout: Duration::from_millis(200),
            rate_limit_max: 10,
        }
    }
}

impl TestAppBuilder {
    pub fn chat_enabled(mut self, enabled: bool) -> Self {
        self.chat_enabled = enabled;
        self
    }

    pub fn backend(mut self, backend: Arc<dyn AssistantBackend>) -> Self {
        self.backends.push(backend);
        self
    }

    /// Replaces the capturing mailer; `TestApp::mailer` then stays empty.
    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn email_timeout(mut self, timeout: Duration) -> Self {
        self.email_timeout = timeout;
        self
    }

    pub fn build(self) -> TestApp {
        let store = Arc::new(InMemoryStore::new());
        seed_directory(&store);
        let capturing = Arc::new(CapturingMailer::default());
        let mailer: Arc<dyn Mailer> = self
            .mailer
            .unwrap_or_else(|| Arc::clone(&capturing) as Arc<dyn Mailer>);
        let clock = Arc::new(ManualClock::default());
        let identity = Arc::new(TestIdentityProvider::default());
        let limiter = Arc::new(SlidingWindowRateLimiter::new(
            self.rate_limit_max,
            chrono::Duration::seconds(60),
        ));

        let settings = ServiceSettings {
            chat: ChatSettings {
                enabled: self.chat_enabled,
                backend_timeout: self.backend_timeout,
            },
            from_address: "noreply@campuscare.test".into(),
            email_timeout: self.email_timeout,
        };

        let services = Arc::new(ApplicationServices::new(
            settings,
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            mailer,
            self.backends,
            limiter,
            Arc::new(identity.verifier()),
            clock.clone(),
        ));

        TestApp {
            services,
            store,
            mailer: capturing,
            clock,
            identity,
        }
    }
}
