use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::email::{EmailService, SmtpConfig};

pub mod error;
pub mod template;

pub const DEFAULT_LOG_FILTER: &str = "portfolio_site=debug,tower_http=info";

pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer())
    .init();
}

pub fn init_email_service(smtp_config: &SmtpConfig) -> anyhow::Result<EmailService> {
  let email_service = EmailService::new(smtp_config.clone())?;
  tracing::info!(
    "Mail transport configured for {}:{} (tls: {})",
    smtp_config.host,
    smtp_config.port,
    smtp_config.use_tls
  );
  Ok(email_service)
}
