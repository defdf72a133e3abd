use anyhow::Context;
use tokio::signal;

use dotenvy::dotenv;

use portfolio_site::config::AppConfig;
use portfolio_site::create_app;
use portfolio_site::state::SharedAppState;
use portfolio_site::utils::{init_email_service, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  init_tracing();

  let config = AppConfig::from_env()?;
  if config.uses_default_secret() {
    tracing::warn!("SESSION_SECRET is not set; using the development secret key");
  }

  let email_service = init_email_service(&config.smtp)?;
  let address = config.server.bind_address();
  let app = create_app(SharedAppState::new(config, email_service));

  let listener = tokio::net::TcpListener::bind(&address)
    .await
    .with_context(|| format!("Failed to bind {}", address))?;

  tracing::info!("Server running on http://{}", address);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
