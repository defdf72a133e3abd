use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};

use crate::{config::SiteConfig, utils::template::render};

pub const STATIC_URL: &str = "/static";
pub const CONTACT_URL: &str = "/contact";
pub const RESUME_URL: &str = "/resume";

pub fn homepage_context(year: i32) -> HashMap<&'static str, String> {
  HashMap::from([
    ("static_url", STATIC_URL.to_string()),
    ("contact_url", CONTACT_URL.to_string()),
    ("resume_url", RESUME_URL.to_string()),
    ("current_year", year.to_string()),
  ])
}

/// Reads the homepage template from disk and fills in its variables.
pub async fn render_homepage(site: &SiteConfig) -> Result<String> {
  let path = site.homepage_template();
  let template = tokio::fs::read_to_string(&path)
    .await
    .with_context(|| format!("Failed to read template {}", path.display()))?;

  Ok(render(&template, &homepage_context(Utc::now().year())))
}
