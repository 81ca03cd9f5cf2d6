use serde::{Deserialize, Serialize};

/// Defines a data source
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// The ID of the data source
    pub id: String,
    /// The name of the data source
    pub name: Option<String>,
    /// The connector type of the data source, eg "jdbc.oracle"
    pub r#type: String,
    /// The type specific connection options for the data source
    #[serde(default)]
    pub options: serde_yaml::Value,
}
