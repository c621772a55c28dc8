use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::repository::daily_log::DAILY_LOG_FILE_NAME;
use crate::repository::{DailyLogRepository, FileDailyLogRepository, InMemoryDailyLogRepository};

pub const DATA_ENV_VAR: &str = "EGGSORT_DATA";
const DATA_DIR_NAME: &str = ".eggsort";

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Sample,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_source: DataSource,
}

impl Config {
    /// Picks the data source: explicit path, then `EGGSORT_DATA`, then
    /// `~/.eggsort/daily_logs.json` when it exists, else the built-in sample.
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        let env_path = std::env::var(DATA_ENV_VAR).ok();
        let home_file = dirs::home_dir().map(|home| home.join(DATA_DIR_NAME).join(DAILY_LOG_FILE_NAME));
        Self::resolve_with(cli_path, env_path, home_file.as_deref())
    }

    pub fn resolve_with(cli_path: Option<PathBuf>, env_path: Option<String>, home_file: Option<&Path>) -> Self {
        let env_path = env_path
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let data_source = match cli_path.or(env_path) {
            Some(path) => DataSource::File(path),
            None => match home_file {
                Some(path) if path.exists() => DataSource::File(path.to_path_buf()),
                _ => DataSource::Sample,
            },
        };
        Config { data_source }
    }

    pub fn open_repository(&self) -> Result<Box<dyn DailyLogRepository>> {
        match &self.data_source {
            DataSource::Sample => {
                log::debug!("using built-in sample data");
                Ok(Box::new(InMemoryDailyLogRepository::sample()))
            }
            DataSource::File(path) => Ok(Box::new(FileDailyLogRepository::open(path)?)),
        }
    }
}
