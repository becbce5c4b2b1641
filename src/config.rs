//! # Configuration
//!
//! Batch configuration loaded from an optional TOML file merged with
//! `PEDIGREE_`-prefixed environment variables over built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PedigreeError, Result};
use crate::inference::PassOrder;
use crate::state_machine::ConditionChannel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterConfig {
    pub database_url: String,
    pub channel: ConditionChannel,
    pub pass_order: PassOrder,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/pedigree_register_development".to_string(),
            channel: ConditionChannel::Slem,
            pass_order: PassOrder::ClearThenCarrier,
        }
    }
}

impl RegisterConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `PEDIGREE_*` environment variables (highest precedence).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("database_url", defaults.database_url)
            .map_err(|e| PedigreeError::configuration(e.to_string()))?
            .set_default("channel", defaults.channel.to_string())
            .map_err(|e| PedigreeError::configuration(e.to_string()))?
            .set_default("pass_order", "clear_then_carrier")
            .map_err(|e| PedigreeError::configuration(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(config::Environment::with_prefix("PEDIGREE"));

        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<RegisterConfig>())
            .map_err(|e| PedigreeError::configuration(e.to_string()))
    }
}
