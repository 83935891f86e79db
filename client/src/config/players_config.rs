use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

const MAX_NAME_LENGTH: usize = 32;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PlayersConfig {
    pub x_name: String,
    pub o_name: String,
    pub ai_name: String,
}

fn validate_name(field: &str, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("{} must be at most {} characters", field, MAX_NAME_LENGTH));
    }
    Ok(())
}

impl Validate for PlayersConfig {
    fn validate(&self) -> Result<(), String> {
        validate_name("players.x_name", &self.x_name)?;
        validate_name("players.o_name", &self.o_name)?;
        validate_name("players.ai_name", &self.ai_name)?;
        Ok(())
    }
}

impl PlayersConfig {
    /// Replaces the configured human names with the ones given on the command line.
    pub fn with_overrides(
        &self,
        x_name: Option<String>,
        o_name: Option<String>,
    ) -> Result<PlayersConfig, String> {
        let players = PlayersConfig {
            x_name: x_name.unwrap_or_else(|| self.x_name.clone()),
            o_name: o_name.unwrap_or_else(|| self.o_name.clone()),
            ai_name: self.ai_name.clone(),
        };
        players.validate()?;
        Ok(players)
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            x_name: "Player X".to_string(),
            o_name: "Player O".to_string(),
            ai_name: "AI Computer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_valid() {
        assert!(PlayersConfig::default().validate().is_ok());
    }

    #[test]
    fn test_overrides_replace_only_given_names() {
        let players = PlayersConfig::default()
            .with_overrides(Some("Ann".to_string()), None)
            .unwrap();
        assert_eq!(players.x_name, "Ann");
        assert_eq!(players.o_name, "Player O");
        assert_eq!(players.ai_name, "AI Computer");
    }

    #[test]
    fn test_overrides_are_validated() {
        let defaults = PlayersConfig::default();

        let blank = defaults.with_overrides(Some("   ".to_string()), None);
        assert_eq!(blank.unwrap_err(), "players.x_name must not be empty");

        let long = defaults.with_overrides(None, Some("n".repeat(MAX_NAME_LENGTH + 1)));
        assert_eq!(long.unwrap_err(), "players.o_name must be at most 32 characters");

        let exact = defaults.with_overrides(None, Some("n".repeat(MAX_NAME_LENGTH)));
        assert!(exact.is_ok());
    }
}
