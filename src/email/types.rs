use lettre::transport::smtp::authentication::Credentials;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub use_tls: bool,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl SmtpConfig {
  /// Credentials for the relay, or `None` when no username is configured.
  pub fn credentials(&self) -> Option<Credentials> {
    if self.username.is_empty() {
      return None;
    }
    Some(Credentials::new(self.username.clone(), self.password.clone()))
  }
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      use_tls: true,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
  pub to: Vec<String>,
  pub subject: String,
  pub body: String,
  pub reply_to: Option<String>,
}

impl EmailMessage {
  pub fn new(to: Vec<String>, subject: String, body: String) -> Self {
    EmailMessage {
      to,
      subject,
      body,
      reply_to: None,
    }
  }

  pub fn with_reply_to(mut self, reply_to: Option<String>) -> Self {
    self.reply_to = reply_to;
    self
  }
}
