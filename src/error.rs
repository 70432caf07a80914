use thiserror::Error;

/// Main error type for the stats bot
#[derive(Error, Debug)]
pub enum PuckbotError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid source URL: {0}")]
    SourceUrl(#[from] url::ParseError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Stats source fetch failed: {0}")]
    Fetch(String),

    // Telegram API errors
    #[error("Telegram API error: {0}")]
    Telegram(String),

    // Server errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, PuckbotError>;
