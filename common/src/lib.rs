pub mod config;
pub mod error;
pub mod games;
pub mod identifiers;
pub mod logger;

pub use error::{ConfigError, GameError, Result};
pub use identifiers::*;
