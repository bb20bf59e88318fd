use anyhow::{Context, Result};
use campuscare_core::application::{
    commands::chat::ChatSettings,
    ports::{
        assistant::AssistantBackend, mail::Mailer, rate_limit::ChatRateLimiter,
        security::TokenVerifier, time::Clock,
    },
    services::{ApplicationServices, ServiceSettings},
};
use campuscare_core::config::AppConfig;
use campuscare_core::domain::{
    audit::AuditLogRepository,
    chat::{ChatExchangeRepository, FaqRepository},
    notification::NotificationRepository,
    ticket::{TicketReadRepository, TicketWriteRepository},
    user::UserRepository,
};
use campuscare_core::infrastructure::{
    assistant::{GeminiBackend, OpenAiBackend},
    database,
    mail::{LettreMailer, LogMailer, SmtpSettings},
    rate_limit::SlidingWindowRateLimiter,
    repositories::{
        PostgresAuditLogRepository, PostgresChatExchangeRepository, PostgresFaqRepository,
        PostgresNotificationRepository, PostgresTicketReadRepository,
        PostgresTicketWriteRepository, PostgresUserRepository,
    },
    security::BiscuitTokenVerifier,
    time::SystemClock,
};
use campuscare_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let ticket_write_repo: Arc<dyn TicketWriteRepository> =
        Arc::new(PostgresTicketWriteRepository::new(pool.clone()));
    let ticket_read_repo: Arc<dyn TicketReadRepository> =
        Arc::new(PostgresTicketReadRepository::new(pool.clone()));
    let audit_log_repo: Arc<dyn AuditLogRepository> =
        Arc::new(PostgresAuditLogRepository::new(pool.clone()));
    let notification_repo: Arc<dyn NotificationRepository> =
        Arc::new(PostgresNotificationRepository::new(pool.clone()));
    let chat_repo: Arc<dyn ChatExchangeRepository> =
        Arc::new(PostgresChatExchangeRepository::new(pool.clone()));
    let faq_repo: Arc<dyn FaqRepository> = Arc::new(PostgresFaqRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));

    let mailer = build_mailer(&config);
    let assistant_backends = build_backends(&config);

    let window = chrono::Duration::from_std(config.chat_rate_limit_window())
        .context("chat rate limit window out of range")?;
    let rate_limiter: Arc<dyn ChatRateLimiter> = Arc::new(SlidingWindowRateLimiter::new(
        config.chat_rate_limit_max(),
        window,
    ));
    let token_verifier: Arc<dyn TokenVerifier> =
        Arc::new(BiscuitTokenVerifier::new(config.identity_public_key())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let settings = ServiceSettings {
        chat: ChatSettings {
            enabled: config.chatbot_enabled(),
            backend_timeout: config.assistant_timeout(),
        },
        from_address: config.default_from_email().to_string(),
        email_timeout: config.email_timeout(),
    };

    let services = Arc::new(ApplicationServices::new(
        settings,
        ticket_write_repo,
        ticket_read_repo,
        audit_log_repo,
        notification_repo,
        chat_repo,
        faq_repo,
        user_repo,
        mailer,
        assistant_backends,
        rate_limiter,
        token_verifier,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn build_mailer(config: &AppConfig) -> Arc<dyn Mailer> {
    let Some(smtp) = config.smtp() else {
        info!("SMTP_HOST not set, emails will be logged");
        return Arc::new(LogMailer);
    };
    let settings = SmtpSettings {
        host: smtp.host.clone(),
        port: smtp.port,
        username: smtp.username.clone(),
        password: smtp.password.clone(),
    };
    match LettreMailer::new(&settings) {
        Ok(mailer) => Arc::new(mailer),
        Err(err) => {
            warn!(error = %err, host = %settings.host, "smtp relay unusable, emails will be logged");
            Arc::new(LogMailer)
        }
    }
}

/// Gemini first, then OpenAI; the rule engine always answers last.
fn build_backends(config: &AppConfig) -> Vec<Arc<dyn AssistantBackend>> {
    let mut backends: Vec<Arc<dyn AssistantBackend>> = Vec::new();
    let timeout = config.assistant_timeout();

    if let Some(gemini) = config.gemini() {
        match GeminiBackend::new(&gemini.api_key, &gemini.model, timeout) {
            Ok(backend) => backends.push(Arc::new(backend)),
            Err(err) => warn!(error = %err, "gemini backend disabled"),
        }
    }
    if let Some(openai) = config.openai() {
        match OpenAiBackend::new(&openai.api_key, &openai.model, timeout) {
            Ok(backend) => backends.push(Arc::new(backend)),
            Err(err) => warn!(error = %err, "openai backend disabled"),
        }
    }

    info!(
        remote_backends = backends.len(),
        chatbot_enabled = config.chatbot_enabled(),
        "assistant configured"
    );
    backends
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("shutdown signal received");
}
