mod ai_config;
mod config;
mod history_config;
mod players_config;

pub use ai_config::AiConfig;
pub use config::{Config, default_config_path, get_config_manager};
pub use history_config::HistoryConfig;
pub use players_config::PlayersConfig;
