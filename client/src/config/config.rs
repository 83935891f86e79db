use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::{AiConfig, HistoryConfig, PlayersConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub players: PlayersConfig,
    pub ai: AiConfig,
    pub history: HistoryConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.players.validate()?;
        self.ai.validate()?;
        self.history.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer, StorageError};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_client_config_{}.yaml", random_number);
        std::env::temp_dir().join(file_name)
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().ai.think_delay_ms, 800);
        assert_eq!(Config::default().history.max_records, 50);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_manager() {
        let file_path = get_temp_file_path();
        let config_manager = get_config_manager(&file_path);

        let mut config = Config::default();
        config.players.x_name = "Ann".to_string();
        config.ai.think_delay_ms = 0;
        config_manager.set_config(&config).unwrap();

        let content = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(content.contains("x_name: Ann"));

        let reloaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(reloaded, config);

        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("players:\n  x_name: Zed\n").unwrap();
        assert_eq!(config.players.x_name, "Zed");
        assert_eq!(config.players.o_name, "Player O");
        assert_eq!(config.history, HistoryConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.players.o_name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ai.think_delay_ms = 60_000;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.history.max_records = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_reports_validation_error() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "history:\n  location: ''\n").unwrap();
        let result = get_config_manager(&file_path).get_config();
        assert!(matches!(result, Err(StorageError::Validation(_))));
        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_history_location_resolution() {
        let history = HistoryConfig::default();
        let base = Path::new("/tmp/games");
        assert_eq!(
            history.resolve_location(base),
            PathBuf::from("/tmp/games/tictactoe_history.yaml")
        );

        let absolute = HistoryConfig {
            location: "/var/lib/ttt.yaml".to_string(),
            max_records: 10,
        };
        assert_eq!(absolute.resolve_location(base), PathBuf::from("/var/lib/ttt.yaml"));
    }
}
