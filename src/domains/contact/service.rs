use async_trait::async_trait;
use std::error::Error;
use validator::Validate;

use super::model::{
  ContactForm, ContactResponse, ContactSubmission, ACCEPTED_MESSAGE, DELIVERY_FAILED_MESSAGE, GENERIC_FAILURE_MESSAGE,
  MISSING_FIELDS_MESSAGE, SENT_MESSAGE,
};
use crate::{
  config::ContactConfig,
  email::{EmailMessage, Mailer},
};

#[derive(Debug)]
pub enum ContactServiceError {
  MissingFields,
  DeliveryFailed(String),
  InternalServerError(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::MissingFields => write!(f, "Missing Fields"),
      ContactServiceError::DeliveryFailed(msg) => write!(f, "Delivery Failed: {}", msg),
      ContactServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

/// How an accepted submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
  /// The transport accepted the email.
  Sent,
  /// The transport failed; the visitor is still told the message was received.
  Accepted,
}

impl From<ContactOutcome> for ContactResponse {
  fn from(outcome: ContactOutcome) -> Self {
    match outcome {
      ContactOutcome::Sent => ContactResponse::success(SENT_MESSAGE),
      ContactOutcome::Accepted => ContactResponse::success(ACCEPTED_MESSAGE),
    }
  }
}

impl From<ContactServiceError> for ContactResponse {
  fn from(error: ContactServiceError) -> Self {
    match error {
      ContactServiceError::MissingFields => ContactResponse::failure(MISSING_FIELDS_MESSAGE),
      ContactServiceError::DeliveryFailed(_) => ContactResponse::failure(DELIVERY_FAILED_MESSAGE),
      ContactServiceError::InternalServerError(_) => ContactResponse::failure(GENERIC_FAILURE_MESSAGE),
    }
  }
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, form: ContactForm) -> Result<ContactOutcome, ContactServiceError>;
}

pub struct ContactServiceImpl<M> {
  mailer: M,
  config: ContactConfig,
}

impl<M> ContactServiceImpl<M>
where
  M: Mailer,
{
  pub fn new(mailer: M, config: ContactConfig) -> Self {
    Self { mailer, config }
  }
}

fn into_submission(form: ContactForm) -> Result<ContactSubmission, ContactServiceError> {
  form.validate().map_err(|_| ContactServiceError::MissingFields)?;

  let (Some(name), Some(email), Some(message)) = (form.name, form.email, form.message) else {
    return Err(ContactServiceError::MissingFields);
  };

  Ok(ContactSubmission { name, email, message })
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
  M: Mailer,
{
  async fn submit(&self, form: ContactForm) -> Result<ContactOutcome, ContactServiceError> {
    let submission = into_submission(form)?;

    let message = EmailMessage::new(
      vec![self.config.recipient.clone()],
      submission.subject(),
      submission.body(),
    )
    .with_reply_to(submission.reply_to());

    match self.mailer.send(&message).await {
      Ok(()) => {
        tracing::info!("Contact message from {} delivered", submission.name);
        Ok(ContactOutcome::Sent)
      }
      Err(e) => {
        tracing::error!("Email sending failed: {:?}", e);
        if self.config.report_delivery_failure {
          Err(ContactServiceError::DeliveryFailed(e.to_string()))
        } else {
          Ok(ContactOutcome::Accepted)
        }
      }
    }
  }
}
