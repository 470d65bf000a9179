use std::env;
use validator::{Validate, ValidationError};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(length(min = 1, max = 3, message = "PIZZA_CURRENCY must be 1-3 characters"))]
    pub currency: String,
    #[validate(custom = "validate_log_level")]
    pub log_level: String,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            log_level: "warn".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let defaults = Config::default();
        let config = Config {
            currency: env::var("PIZZA_CURRENCY").unwrap_or(defaults.currency),
            log_level: env::var("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
            environment: env::var("APP_ENV").unwrap_or(defaults.environment),
        };

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if !LOG_LEVELS.contains(&level) {
        return Err(ValidationError::new("LOG_LEVEL must be one of trace, debug, info, warn, error"));
    }
    Ok(())
}
