mod config_content_provider;
mod config_manager;
mod config_serializer;
mod engine_settings;
mod validate;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use engine_settings::{EngineSettings, ExistingSessionPolicy};
pub use validate::Validate;
