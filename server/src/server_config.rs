use common::config::Validate;
use common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_files_path: String,
    /// Who opens the very first game after startup. Games started over the
    /// API carry their own first-player choice.
    pub first_player: FirstPlayerMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            static_files_path: "server/static".to_string(),
            first_player: FirstPlayerMode::Human,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("Bind address must not be empty".to_string());
        }
        if self.static_files_path.is_empty() {
            return Err("Static files path must not be empty".to_string());
        }
        Ok(())
    }
}
