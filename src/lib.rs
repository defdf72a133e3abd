pub mod app;
pub mod config;
pub mod domains;
pub mod email;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use app::create_app;
pub use utils::error::AppError;
