use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token from @BotFather
    pub bot_token: String,
    /// Public base URL of this deployment (e.g. "https://my-app.koyeb.app").
    /// When set, the webhook is registered with Telegram at startup.
    #[serde(default)]
    pub public_url: Option<String>,
    /// Secret token Telegram echoes back in webhook requests
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Webhook server port (hosting platforms usually inject this)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_secret() -> String {
    "change_me".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Statistics table URL (KHL 2025/26 regular season skaters)
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Fetch timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_source_url() -> String {
    "https://allhockey.ru/stat/khl/2026/312/player".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum age of the cached table before a refresh, in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatcherConfig {
    /// Maximum number of player cards per reply
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("PUCKBOT_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (PUCKBOT_TELEGRAM__BOT_TOKEN, etc.)
            .add_source(
                Environment::with_prefix("PUCKBOT")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_everything_but_the_token() {
        let config: AppConfig = Config::builder()
            .set_override("telegram.bot_token", "123:abc")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.telegram.bot_token, "123:abc");
        assert_eq!(config.telegram.secret, "change_me");
        assert_eq!(config.telegram.port, 8080);
        assert_eq!(config.telegram.public_url, None);
        assert_eq!(config.source.url, "https://allhockey.ru/stat/khl/2026/312/player");
        assert_eq!(config.source.user_agent, "Mozilla/5.0");
        assert_eq!(config.source.timeout_secs, 20);
        assert_eq!(config.cache.ttl_secs, 60);
        assert_eq!(config.matcher.limit, 3);
        assert_eq!(config.logging.level, "info");
    }
}
