use std::{collections::HashMap, time::Duration};

use dbflow_connectors_base::common::StaticTypeCatalog;
use dbflow_core::data::{DbVendor, ResolvedDbType};
use serde::{Deserialize, Serialize};

/// JDBC connection config
pub trait JdbcConnectionConfig: Send + Sync {
    /// Gets the vendor of the target database
    fn vendor(&self) -> DbVendor;

    /// Gets the JDBC connection URL
    fn get_jdbc_url(&self) -> String;

    /// Gets the class name of the JDBC driver
    fn get_driver_class_name(&self) -> String;

    /// Gets the connection props
    fn get_jdbc_props(&self) -> HashMap<String, String>;

    /// Gets the connection pool config
    fn get_pool_config(&self) -> Option<JdbcConnectionPoolConfig>;

    /// Gets the user defined types for the connection
    fn get_custom_types(&self) -> Vec<CustomDataType> {
        vec![]
    }
}

/// Options for pooling the JDBC connections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdbcConnectionPoolConfig {
    /// Minimum number of connections
    pub min_cons: u32,
    /// Maximum number of connections
    pub max_cons: u32,
    /// Maximum connection lifetime
    pub max_lifetime: Option<Duration>,
    /// How long a connection can remain idle before closing
    pub idle_timeout: Option<Duration>,
    /// Maximum connection timeout
    pub connect_timeout: Option<Duration>,
}

/// A user defined type, made available to queries by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDataType {
    /// The name of the type used in queries
    pub name: String,
    /// The java.sql.Types id used when binding parameters of this type
    pub id: i32,
}

impl CustomDataType {
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl From<&CustomDataType> for ResolvedDbType {
    fn from(t: &CustomDataType) -> Self {
        ResolvedDbType::new(t.id, t.name.clone())
    }
}

/// Builds a catalog of the custom types defined on the connection config
pub fn custom_type_catalog(conf: &dyn JdbcConnectionConfig) -> StaticTypeCatalog {
    StaticTypeCatalog::new(conf.get_custom_types().iter().map(Into::into).collect())
}

/// Adds the user and password to the supplied connection properties
pub fn with_credentials(
    mut props: HashMap<String, String>,
    user: Option<&String>,
    password: Option<&String>,
) -> HashMap<String, String> {
    if let Some(user) = user {
        props.insert("user".into(), user.clone());
    }

    if let Some(password) = password {
        props.insert("password".into(), password.clone());
    }

    props
}

#[cfg(test)]
mod tests {
    use dbflow_core::config;

    use super::*;

    #[test]
    fn test_parse_pool_config() {
        let parsed: JdbcConnectionPoolConfig = config::from_value(
            config::parse_config(
                r#"
min_cons: 1
max_cons: 5
max_lifetime:
  secs: 3600
  nanos: 0
idle_timeout: null
connect_timeout:
  secs: 30
  nanos: 0
"#,
            )
            .unwrap(),
        )
        .unwrap();

        assert_eq!(
            parsed,
            JdbcConnectionPoolConfig {
                min_cons: 1,
                max_cons: 5,
                max_lifetime: Some(Duration::from_secs(3600)),
                idle_timeout: None,
                connect_timeout: Some(Duration::from_secs(30)),
            }
        );
    }

    #[test]
    fn test_with_credentials() {
        let props = with_credentials(
            HashMap::new(),
            Some(&"admin".to_string()),
            None,
        );

        assert_eq!(props.get("user").map(String::as_str), Some("admin"));
        assert_eq!(props.get("password"), None);
    }
}
