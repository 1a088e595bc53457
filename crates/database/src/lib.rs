pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod services;

pub use config::DatabaseConfig;
pub use error::{ConfigError, ServiceError};
