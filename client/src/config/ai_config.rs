use serde::{Deserialize, Serialize};
use std::time::Duration;
use tictactoe_common::config::Validate;

const MAX_THINK_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AiConfig {
    pub think_delay_ms: u64,
}

impl AiConfig {
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

impl Validate for AiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "ai.think_delay_ms must not exceed {}",
                MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self { think_delay_ms: 800 }
    }
}
