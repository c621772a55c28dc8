use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use anyhow::Result;
use chrono::NaiveDate;
use crate::error::DataError;
use crate::model::daily_log::DailyLog;
use crate::repository::traits::DailyLogRepository;
use crate::repository::warn_inconsistent;

pub const DAILY_LOG_FILE_NAME: &str = "daily_logs.json";

/// Daily logs loaded from a JSON array on disk.
///
/// The file is read once when the repository is opened; later edits to the
/// file are not picked up.
#[derive(Clone, Debug)]
pub struct FileDailyLogRepository {
    file_path: PathBuf,
    logs: Vec<DailyLog>,
}

impl FileDailyLogRepository {
    pub fn open(path: &Path) -> Result<Self> {
        let logs = read_logs(path)?;
        log::debug!("loaded {} daily logs from {}", logs.len(), path.display());
        warn_inconsistent(&logs);

        Ok(FileDailyLogRepository {
            file_path: path.to_path_buf(),
            logs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

fn read_logs(path: &Path) -> Result<Vec<DailyLog>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let logs: Vec<DailyLog> = serde_json::from_reader(reader).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(logs)
}

impl DailyLogRepository for FileDailyLogRepository {
    fn list(&self) -> Result<Vec<DailyLog>> {
        Ok(self.logs.clone())
    }

    fn get(&self, date: NaiveDate) -> Result<Option<DailyLog>> {
        Ok(self.logs.iter().find(|l| l.date == date).cloned())
    }
}
