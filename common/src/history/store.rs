use std::path::{Path, PathBuf};

use super::match_history::MatchHistory;
use super::match_record::MatchRecord;
use crate::config::{ConfigManager, FileContentConfigProvider, StorageError, YamlConfigSerializer};

/// YAML file holding the finished games. A missing file reads as an empty history.
pub struct HistoryStore {
    manager: ConfigManager<FileContentConfigProvider, MatchHistory, YamlConfigSerializer>,
    max_records: usize,
}

impl HistoryStore {
    pub fn new(location: impl Into<PathBuf>, max_records: usize) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(location),
            max_records,
        }
    }

    pub fn location(&self) -> &Path {
        self.manager.content_provider().path()
    }

    pub fn load(&self) -> Result<MatchHistory, StorageError> {
        self.manager.get_config()
    }

    /// Appends `record`, trims to the configured size and writes the file back.
    ///
    /// The file is re-read first so games saved by another client are kept.
    pub fn record(&self, record: MatchRecord) -> Result<MatchHistory, StorageError> {
        let mut history = self.manager.reload()?;
        history.push(record, self.max_records);
        self.manager.set_config(&history)?;
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameMode;
    use crate::history::MatchWinner;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_history_{}.yaml", random_number))
    }

    fn record(id: i64, winner: MatchWinner) -> MatchRecord {
        MatchRecord {
            id,
            mode: GameMode::Computer,
            winner,
            player_x: "Ann".to_string(),
            player_o: "AI Computer".to_string(),
            played_at_ms: id,
        }
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let store = HistoryStore::new(get_temp_file_path(), 50);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_records_persist_and_trim() {
        let path = get_temp_file_path();
        let store = HistoryStore::new(path.clone(), 3);
        for id in 1..=4 {
            store.record(record(id, MatchWinner::O)).unwrap();
        }

        let reopened = HistoryStore::new(path.clone(), 3);
        let history = reopened.load().unwrap();
        let ids: Vec<i64> = history.games().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert_eq!(history.stats().o_wins, 3);
        assert_eq!(reopened.location(), path.as_path());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_stores_sharing_a_file_keep_each_others_games() {
        let path = get_temp_file_path();
        let first = HistoryStore::new(path.clone(), 50);
        let second = HistoryStore::new(path.clone(), 50);

        first.record(record(1, MatchWinner::X)).unwrap();
        second.record(record(2, MatchWinner::O)).unwrap();
        let history = first.record(record(3, MatchWinner::Draw)).unwrap();

        let ids: Vec<i64> = history.games().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let on_disk = HistoryStore::new(path.clone(), 50).load().unwrap();
        assert_eq!(on_disk, history);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = get_temp_file_path();
        std::fs::write(&path, "{ not: [a, list").unwrap();
        let store = HistoryStore::new(path.clone(), 50);
        assert!(matches!(store.load(), Err(StorageError::Serialize(_))));
        std::fs::remove_file(path).unwrap();
    }
}
