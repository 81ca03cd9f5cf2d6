use serde::{Deserialize, Serialize};

pub use serde_yaml::{from_value, Mapping, Value};

use crate::err::{Context, Result};

mod sources;
pub use sources::*;
mod util;
pub use util::*;

/// Configuration of the database extension
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Default)]
pub struct DbConfig {
    /// The human-readable name of the configuration
    #[serde(default)]
    pub name: String,
    /// List of data source configurations
    #[serde(default)]
    pub sources: Vec<DataSourceConfig>,
}

impl DbConfig {
    pub fn parse(conf_str: &str) -> Result<Self> {
        from_value::<Self>(parse_config(conf_str)?).context("Failed to parse database configuration")
    }

    /// Finds the data source with the supplied id
    pub fn source(&self, id: &str) -> Option<&DataSourceConfig> {
        self.sources.iter().find(|s| s.id == id)
    }
}
