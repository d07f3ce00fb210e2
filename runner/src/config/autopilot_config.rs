use serde::{Deserialize, Serialize};
use snake_common::games::snake::SnakeBotType;

use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AutopilotConfig {
    pub enabled: bool,
    pub bot_type: SnakeBotType,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bot_type: SnakeBotType::Efficient,
        }
    }
}

impl Validate for AutopilotConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
