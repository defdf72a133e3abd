use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::contact::{
    model::ContactForm,
    service::{ContactOutcome, ContactService, ContactServiceError, ContactServiceImpl},
  },
  email::{EmailService, Mailer},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn config(&self) -> &AppConfig;
  fn submit_contact(
    &self,
    form: ContactForm,
  ) -> impl std::future::Future<Output = Result<ContactOutcome, ContactServiceError>> + Send;
}

pub struct SharedAppState<M = EmailService> {
  pub config: Arc<AppConfig>,
  pub contact_service: Arc<ContactServiceImpl<M>>,
}

impl<M> SharedAppState<M>
where
  M: Mailer,
{
  pub fn new(config: AppConfig, mailer: M) -> Self {
    let contact_service = Arc::new(ContactServiceImpl::new(mailer, config.contact.clone()));

    Self {
      config: Arc::new(config),
      contact_service,
    }
  }
}

impl<M> Clone for SharedAppState<M> {
  fn clone(&self) -> Self {
    Self {
      config: Arc::clone(&self.config),
      contact_service: Arc::clone(&self.contact_service),
    }
  }
}

impl<M> AppState for SharedAppState<M>
where
  M: Mailer + 'static,
{
  fn config(&self) -> &AppConfig {
    &self.config
  }

  async fn submit_contact(&self, form: ContactForm) -> Result<ContactOutcome, ContactServiceError> {
    self.contact_service.submit(form).await
  }
}
