use serde::{Deserialize, Serialize};

use super::Validate;

/// What `create_session` does when the channel already has a live game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistingSessionPolicy {
    #[default]
    Replace,
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub existing_session_policy: ExistingSessionPolicy,
    /// Fixed seed for bot randomness. Each session derives its own stream from it.
    pub bot_seed: Option<u64>,
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
