use std::{env, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context, Result};
use lettre::message::Mailbox;

use crate::email::SmtpConfig;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Process-wide settings, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server: ServerConfig,
  pub secret_key: String,
  pub smtp: SmtpConfig,
  pub contact: ContactConfig,
  pub site: SiteConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl ServerConfig {
  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[derive(Debug, Clone)]
pub struct ContactConfig {
  pub recipient: String,
  /// When set, a failed delivery is reported to the visitor instead of being
  /// acknowledged as received.
  pub report_delivery_failure: bool,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
  pub templates_dir: PathBuf,
  pub static_dir: PathBuf,
}

impl SiteConfig {
  pub fn homepage_template(&self) -> PathBuf {
    self.templates_dir.join("index.html")
  }

  pub fn resume_file(&self) -> PathBuf {
    self.static_dir.join("assets").join("resume.pdf")
  }
}

impl Default for SiteConfig {
  fn default() -> Self {
    SiteConfig {
      templates_dir: PathBuf::from("templates"),
      static_dir: PathBuf::from("static"),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the configuration from a key lookup. Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let username = var("MAIL_USERNAME").unwrap_or_default();
    let from_email = var("MAIL_DEFAULT_SENDER")
      .or_else(|| var("MAIL_USERNAME"))
      .ok_or_else(|| anyhow!("MAIL_DEFAULT_SENDER or MAIL_USERNAME environment variable must be set"))?;
    ensure_mailbox("MAIL_DEFAULT_SENDER", &from_email)?;

    let recipient = var("CONTACT_RECIPIENT").unwrap_or_else(|| from_email.clone());
    ensure_mailbox("CONTACT_RECIPIENT", &recipient)?;

    let smtp = SmtpConfig {
      host: var("MAIL_SERVER").unwrap_or_else(|| "smtp.gmail.com".to_string()),
      port: parse_or("MAIL_PORT", var("MAIL_PORT"), 587)?,
      use_tls: parse_flag("MAIL_USE_TLS", var("MAIL_USE_TLS"), true)?,
      username,
      password: var("MAIL_PASSWORD").unwrap_or_default(),
      from_email,
    };

    let site_defaults = SiteConfig::default();

    Ok(AppConfig {
      server: ServerConfig {
        host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
        port: parse_or("PORT", var("PORT"), 5000)?,
      },
      secret_key: var("SESSION_SECRET").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
      smtp,
      contact: ContactConfig {
        recipient,
        report_delivery_failure: parse_flag(
          "CONTACT_REPORT_DELIVERY_FAILURE",
          var("CONTACT_REPORT_DELIVERY_FAILURE"),
          false,
        )?,
      },
      site: SiteConfig {
        templates_dir: var("TEMPLATES_DIR").map(PathBuf::from).unwrap_or(site_defaults.templates_dir),
        static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(site_defaults.static_dir),
      },
    })
  }

  pub fn uses_default_secret(&self) -> bool {
    self.secret_key == DEFAULT_SECRET_KEY
  }
}

fn ensure_mailbox(key: &str, value: &str) -> Result<()> {
  value
    .parse::<Mailbox>()
    .with_context(|| format!("{} is not a valid email address: {:?}", key, value))?;
  Ok(())
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  match value {
    Some(raw) => raw
      .parse()
      .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
    None => Ok(default),
  }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool> {
  let Some(raw) = value else {
    return Ok(default);
  };

  match raw.to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(anyhow!("{} must be a boolean, got {:?}", key, raw)),
  }
}
