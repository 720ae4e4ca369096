//! Configuration module
//!
//! Environment-driven configuration for the API server and storage. Values are
//! read once at startup via [`Config::from_env`] and accessed through methods so
//! call sites stay stable if the underlying representation changes.

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_UPLOAD_DIR, MAX_UPLOAD_SIZE_BYTES};

const DEFAULT_SERVER_PORT: u16 = 3000;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    cors_origins: Vec<String>,
    upload_dir: PathBuf,
    max_upload_size_bytes: usize,
    environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults suitable for
    /// local development. Reads `.env` if present.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));

        let max_upload_size_bytes = env::var("MAX_UPLOAD_SIZE_MB")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .map(|mb| mb * 1024 * 1024)
            .unwrap_or(MAX_UPLOAD_SIZE_BYTES);

        Ok(Config {
            server_port,
            cors_origins,
            upload_dir,
            max_upload_size_bytes,
            environment,
        })
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_bytes
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            cors_origins: vec!["*".to_string()],
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_upload_size_bytes: MAX_UPLOAD_SIZE_BYTES,
            environment: "development".to_string(),
        }
    }
}
