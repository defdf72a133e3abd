use axum::{
  extract::{Form, FromRequest, Multipart, Request, State},
  http::header::CONTENT_TYPE,
  response::Json as JsonResponse,
  routing::post,
  Router,
};

use super::{
  model::{ContactForm, ContactResponse},
  service::ContactServiceError,
};
use crate::{state::AppState, AppError};

pub fn contact_routes<S: AppState>() -> Router<S> {
  Router::new().route("/contact", post(contact_handler::<S>))
}

/// Always answers 200 with a [`ContactResponse`]; failures only show in `success`.
pub async fn contact_handler<S: AppState>(
  State(state): State<S>,
  form: Result<ContactForm, AppError>,
) -> JsonResponse<ContactResponse> {
  let result = match form {
    Ok(form) => state.submit_contact(form).await,
    Err(e) => {
      tracing::error!("Contact form error: {}", e.message);
      Err(ContactServiceError::InternalServerError(e.message))
    }
  };

  JsonResponse(match result {
    Ok(outcome) => outcome.into(),
    Err(e) => e.into(),
  })
}

/// Accepts both `application/x-www-form-urlencoded` and `multipart/form-data`
/// bodies. Any other content type yields an empty form.
impl<S> FromRequest<S> for ContactForm
where
  S: Send + Sync,
{
  type Rejection = AppError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let content_type = req
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default()
      .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
      let multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?;
      read_multipart(multipart).await
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
      let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?;

      let mut form = ContactForm::default();
      for (name, value) in pairs {
        if let Some(slot) = field_slot(&mut form, &name) {
          slot.get_or_insert(value);
        }
      }
      Ok(form)
    } else {
      Ok(ContactForm::default())
    }
  }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ContactForm, AppError> {
  let mut form = ContactForm::default();

  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(|e| AppError::bad_request(e.body_text()))?
  {
    let slot = match field.name() {
      Some(name) => field_slot(&mut form, name),
      None => None,
    };
    let Some(slot) = slot else {
      continue;
    };

    let value = field.text().await.map_err(|e| AppError::bad_request(e.body_text()))?;
    slot.get_or_insert(value);
  }

  Ok(form)
}

/// The form field a submitted key fills. A repeated key keeps its first value.
fn field_slot<'a>(form: &'a mut ContactForm, name: &str) -> Option<&'a mut Option<String>> {
  match name {
    "name" => Some(&mut form.name),
    "email" => Some(&mut form.email),
    "message" => Some(&mut form.message),
    _ => None,
  }
}
