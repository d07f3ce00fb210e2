mod autopilot_config;
mod main_config;
mod snake_game_config;

pub(crate) use snake_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

pub use autopilot_config::AutopilotConfig;
pub use main_config::{Config, get_config_manager};
pub use snake_game_config::SnakeGameConfig;
