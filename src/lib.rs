pub mod config;
pub mod database;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod web;

pub use config::ServerConfig;
pub use database::ActivityDirectory;
pub use error::{ConfigError, DirectoryError, SeedError};
pub use web::{build_router, state::AppState};
