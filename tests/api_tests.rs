use std::{
  collections::HashMap,
  path::PathBuf,
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  },
};

use async_trait::async_trait;
use axum::{
  body::Body,
  http::{self, header, Request, StatusCode},
  Router,
};
use http_body_util::BodyExt;
use portfolio_site::{
  config::AppConfig,
  create_app,
  email::{EmailMessage, Mailer},
  state::SharedAppState,
};
use serde_json::Value;
use tower::ServiceExt; // for `app.oneshot()`

#[derive(Clone, Default)]
struct CountingMailer {
  calls: Arc<AtomicUsize>,
  fail: bool,
}

#[async_trait]
impl Mailer for CountingMailer {
  async fn send(&self, _message: &EmailMessage) -> anyhow::Result<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.fail {
      anyhow::bail!("smtp relay unreachable");
    }
    Ok(())
  }
}

fn config(extra: &[(&str, &str)]) -> AppConfig {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  let mut vars: HashMap<String, String> = HashMap::from([
    ("MAIL_USERNAME".to_string(), "owner@example.com".to_string()),
    ("TEMPLATES_DIR".to_string(), root.join("templates").display().to_string()),
    ("STATIC_DIR".to_string(), root.join("static").display().to_string()),
  ]);
  for (key, value) in extra {
    vars.insert(key.to_string(), value.to_string());
  }
  AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

fn app(mailer: CountingMailer) -> Router {
  create_app(SharedAppState::new(config(&[]), mailer))
}

async fn post_contact(app: Router, body: &'static str) -> (StatusCode, Value) {
  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::POST)
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap(),
    )
    .await
    .unwrap();

  let status = response.status();
  let body = response.into_body().collect().await.unwrap().to_bytes();
  (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn homepage_test() {
  let response = app(CountingMailer::default())
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  assert!(response.headers()[header::CONTENT_TYPE]
    .to_str()
    .unwrap()
    .starts_with("text/html"));

  let body = response.into_body().collect().await.unwrap().to_bytes();
  assert!(!body.is_empty());
}

#[tokio::test]
async fn resume_test() {
  let response = app(CountingMailer::default())
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri("/resume")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");

  let body = response.into_body().collect().await.unwrap().to_bytes();
  let expected = std::fs::read(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static/assets/resume.pdf")).unwrap();
  assert_eq!(&body[..], &expected[..]);
}

#[tokio::test]
async fn contact_delivered_test() {
  let mailer = CountingMailer::default();
  let (status, body) = post_contact(
    app(mailer.clone()),
    "name=Alice&email=alice%40example.com&message=Hi",
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["success"], true);
  assert_eq!(body["message"], "Message sent successfully!");
  assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn contact_transport_failure_test() {
  let mailer = CountingMailer {
    fail: true,
    ..CountingMailer::default()
  };
  let (status, body) = post_contact(
    app(mailer.clone()),
    "name=Alice&email=alice%40example.com&message=Hi",
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["success"], true);
  assert_eq!(body["message"], "Message received! I will get back to you soon.");
  assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn contact_transport_failure_reported_test() {
  let mailer = CountingMailer {
    fail: true,
    ..CountingMailer::default()
  };
  let app = create_app(SharedAppState::new(
    config(&[("CONTACT_REPORT_DELIVERY_FAILURE", "true")]),
    mailer,
  ));
  let (_, body) = post_contact(app, "name=Alice&email=alice%40example.com&message=Hi").await;

  assert_eq!(body["success"], false);
  assert_eq!(body["message"], "Message could not be sent. Please try again later.");
}

#[tokio::test]
async fn contact_missing_field_test() {
  let mailer = CountingMailer::default();
  let (status, body) = post_contact(app(mailer.clone()), "name=&email=alice%40example.com&message=Hi").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["success"], false);
  assert_eq!(body["message"], "All fields are required");
  assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
}
