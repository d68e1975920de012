use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Default Gemini model used for answering.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct LegalbotConfig {
    pub server: ServerConfig,
    pub google: GoogleConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model name for text answers (e.g., gemini-2.0-flash).
    pub text_model: String,
}

impl LegalbotConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let server = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(LegalbotConfig {
            server,
            google: GoogleConfig {
                // No default in any environment: the process must not start
                // without an upstream credential.
                api_key: get_env("GOOGLE_API_KEY", None, is_prod)?,
            },
            model: ModelConfig {
                text_model: get_env("LEGALBOT_MODEL", Some(DEFAULT_MODEL), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
