use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use super::service::{render_homepage, RESUME_URL, STATIC_URL};
use crate::{config::SiteConfig, state::AppState, AppError};

pub fn site_routes<S: AppState>(site: &SiteConfig) -> Router<S> {
  Router::new()
    .route("/", get(index_handler::<S>))
    .route_service(RESUME_URL, ServeFile::new(site.resume_file()))
    .nest_service(STATIC_URL, ServeDir::new(&site.static_dir))
}

pub async fn index_handler<S: AppState>(State(state): State<S>) -> Result<Html<String>, AppError> {
  let html = render_homepage(&state.config().site).await?;
  Ok(Html(html))
}
