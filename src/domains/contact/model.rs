use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const ACCEPTED_MESSAGE: &str = "Message received! I will get back to you soon.";
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const DELIVERY_FAILED_MESSAGE: &str = "Message could not be sent. Please try again later.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Contact form as submitted. Absent fields decode to `None`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
  #[validate(required, length(min = 1))]
  pub name: Option<String>,
  #[validate(required, length(min = 1))]
  pub email: Option<String>,
  #[validate(required, length(min = 1))]
  pub message: Option<String>,
}

/// A contact form with every field present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
  pub name: String,
  pub email: String,
  pub message: String,
}

impl ContactSubmission {
  pub fn subject(&self) -> String {
    format!("Portfolio Contact from {}", self.name)
  }

  pub fn body(&self) -> String {
    format!(
      "New contact form submission:\n\nName: {}\nEmail: {}\nMessage: {}\n",
      self.name, self.email, self.message
    )
  }

  /// The visitor's address, if it is usable as a Reply-To header.
  pub fn reply_to(&self) -> Option<String> {
    self.email.parse::<Mailbox>().ok().map(|_| self.email.clone())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactResponse {
  pub success: bool,
  pub message: String,
}

impl ContactResponse {
  pub fn success(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: message.into(),
    }
  }

  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
    }
  }
}
