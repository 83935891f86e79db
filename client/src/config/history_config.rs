use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_common::config::Validate;
use tictactoe_common::history::{DEFAULT_MAX_RECORDS, MAX_RECORDS_LIMIT};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    pub location: String,
    pub max_records: usize,
}

impl HistoryConfig {
    /// Relative locations are taken from the directory holding the config file.
    pub fn resolve_location(&self, base_dir: &Path) -> PathBuf {
        let location = Path::new(&self.location);
        if location.is_absolute() {
            location.to_path_buf()
        } else {
            base_dir.join(location)
        }
    }
}

impl Validate for HistoryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.is_empty() {
            return Err("history location must not be empty".to_string());
        }
        if self.max_records == 0 || self.max_records > MAX_RECORDS_LIMIT {
            return Err(format!(
                "history.max_records must be between 1 and {}",
                MAX_RECORDS_LIMIT
            ));
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            location: "tictactoe_history.yaml".to_string(),
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}
