pub mod adapters;
pub mod api;
pub mod collector;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod matcher;
pub mod services;

pub use config::AppConfig;
pub use error::{PuckbotError, Result};
