use serde::{Deserialize, Serialize};

use super::{
    AutopilotConfig, ConfigManager, FileContentConfigProvider, SnakeGameConfig, Validate,
    YamlConfigSerializer,
};

const CONFIG_FILE: &str = "snake_runner_config.yaml";

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or(CONFIG_FILE))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: SnakeGameConfig,
    pub autopilot: AutopilotConfig,
    #[serde(default)]
    pub render_board: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.autopilot.validate()?;
        Ok(())
    }
}
