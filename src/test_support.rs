use std::{collections::HashMap, path::PathBuf};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::{AppConfig, SiteConfig},
  email::{EmailMessage, Mailer},
  state::SharedAppState,
};

mockall::mock! {
  pub Mailer {}

  #[async_trait]
  impl Mailer for Mailer {
    async fn send(&self, message: &EmailMessage) -> anyhow::Result<()>;
  }
}

pub fn site_config() -> SiteConfig {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  SiteConfig {
    templates_dir: root.join("templates"),
    static_dir: root.join("static"),
  }
}

pub fn test_config() -> AppConfig {
  let vars = HashMap::from([
    ("MAIL_SERVER", "localhost"),
    ("MAIL_PORT", "1025"),
    ("MAIL_USE_TLS", "false"),
    ("MAIL_DEFAULT_SENDER", "portfolio@example.com"),
    ("CONTACT_RECIPIENT", "owner@example.com"),
  ]);
  let mut config =
    AppConfig::from_lookup(|key| vars.get(key).map(|value| value.to_string())).expect("build test config");
  config.site = site_config();
  config
}

pub fn app_with_mailer(mailer: MockMailer) -> Router {
  app_with_config(test_config(), mailer)
}

pub fn app_with_config(config: AppConfig, mailer: MockMailer) -> Router {
  create_app(SharedAppState::new(config, mailer))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");
  send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/x-www-form-urlencoded")
    .body(Body::from(body.to_string()))
    .expect("build request");
  send(app, request).await
}

pub async fn post_multipart(app: Router, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, Bytes) {
  const BOUNDARY: &str = "portfolio-test-boundary";

  let mut body = String::new();
  for (name, value) in fields {
    body.push_str(&format!(
      "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
    ));
  }
  body.push_str(&format!("--{BOUNDARY}--\r\n"));

  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
    .body(Body::from(body))
    .expect("build request");
  send(app, request).await
}
