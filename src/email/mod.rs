//! Outbound email delivery
//!
//! The [`Mailer`] trait is the seam the contact relay talks to. [`EmailService`]
//! is the SMTP implementation built on lettre.

mod service;
mod types;

pub use service::{EmailService, Mailer};
pub use types::{EmailMessage, SmtpConfig};
