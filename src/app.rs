use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
  domains::{contact::rest::contact_routes, site::rest::site_routes},
  state::AppState,
};

pub fn create_app<S: AppState>(state: S) -> Router {
  let site = state.config().site.clone();

  Router::new()
    .merge(site_routes::<S>(&site))
    .merge(contact_routes::<S>())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
