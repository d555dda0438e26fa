use common::config::{ConfigManager, Validate};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tic_tac_toe_client_config.yaml";

const MAX_BOT_MOVE_DELAY_MS: u64 = 10_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<Config> {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Pacing delay before the computer's move is applied.
    pub bot_move_delay_ms: u64,
    /// Fixed seed for the session RNG; unset means a fresh random seed
    /// per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "Bot move delay must not exceed {}ms",
                MAX_BOT_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_move_delay_ms: 500,
            seed: None,
        }
    }
}
