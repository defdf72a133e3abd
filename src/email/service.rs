use crate::email::types::{EmailMessage, SmtpConfig};
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<()>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  sender: Mailbox,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  /// Builds the SMTP transport. Must be called inside a Tokio runtime because
  /// the connection pool spawns its maintenance task on construction.
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let sender: Mailbox = smtp_config
      .from_email
      .parse()
      .with_context(|| format!("Invalid sender address: {:?}", smtp_config.from_email))?;

    let builder = if smtp_config.use_tls {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
    }
    .port(smtp_config.port);

    let builder = match smtp_config.credentials() {
      Some(creds) => builder.credentials(creds),
      None => builder,
    };

    Ok(EmailService {
      smtp_config,
      sender,
      transporter: builder.build(),
    })
  }

  pub async fn send_email(&self, message: &EmailMessage) -> Result<()> {
    for recipient in &message.to {
      let mut builder = Message::builder()
        .from(self.sender.clone())
        .to(recipient.parse()?)
        .subject(&message.subject)
        .header(ContentType::TEXT_PLAIN);

      if let Some(reply_to) = &message.reply_to {
        builder = builder.reply_to(reply_to.parse()?);
      }

      let email = builder.body(message.body.clone())?;

      self.transporter.send(email).await?;
      tracing::debug!("Email relayed via {}:{}", self.smtp_config.host, self.smtp_config.port);
    }

    Ok(())
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    self.send_email(message).await
  }
}
