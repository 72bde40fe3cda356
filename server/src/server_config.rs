use std::net::SocketAddr;

use common::config::{EngineSettings, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub command_prefix: String,
    pub log_prefix: Option<String>,
    pub verbose: bool,
    pub engine: EngineSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5050".to_string(),
            command_prefix: "!".to_string(),
            log_prefix: None,
            verbose: false,
            engine: EngineSettings::default(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.command_prefix.is_empty() {
            return Err("Command prefix must not be empty".to_string());
        }
        if self.command_prefix.chars().any(char::is_whitespace) {
            return Err(format!(
                "Command prefix '{}' must not contain whitespace",
                self.command_prefix
            ));
        }
        self.listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid listen address '{}': {}", self.listen_addr, e))?;
        self.engine.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigManager, ExistingSessionPolicy, InMemoryConfigProvider, YamlConfigSerializer};
    use common::ConfigError;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_whitespace_prefix_is_invalid() {
        let config = ServerConfig {
            command_prefix: "! ".to_string(),
            ..ServerConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_listen_addr_is_invalid() {
        let config = ServerConfig {
            listen_addr: "nowhere".to_string(),
            ..ServerConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let manager: ConfigManager<_, ServerConfig> = ConfigManager::new(
            InMemoryConfigProvider::new(Some(
                "command_prefix: \"?\"\nengine:\n  existing_session_policy: reject\n".to_string(),
            )),
            YamlConfigSerializer::new(),
        );

        let config = manager.get_config().unwrap();

        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.listen_addr, ServerConfig::default().listen_addr);
        assert_eq!(config.engine.existing_session_policy, ExistingSessionPolicy::Reject);
    }

    #[test]
    fn test_invalid_yaml_config_is_rejected() {
        let manager: ConfigManager<_, ServerConfig> = ConfigManager::new(
            InMemoryConfigProvider::new(Some("command_prefix: \"\"\n".to_string())),
            YamlConfigSerializer::new(),
        );

        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }
}
