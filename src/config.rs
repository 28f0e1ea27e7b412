use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub player_name: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("RECAP_DATA_DIR").unwrap_or_else(|_| "Sneaky_data".to_string());
        if data_dir.trim().is_empty() {
            return Err(AppError::ConfigError(
                "RECAP_DATA_DIR is set but empty".to_string(),
            ));
        }

        let player_name = env::var("RECAP_PLAYER_NAME").unwrap_or_else(|_| "Player".to_string());
        let log_level = env::var("RECAP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            player_name,
            log_level,
        })
    }
}
