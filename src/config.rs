use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

/// Process-wide configuration, read once from the environment. A `.env`
/// file in the working directory is honored when present.
#[derive(Debug)]
pub struct Config {
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Directive string for the tracing env-filter.
    pub log_level: String,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/users".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
