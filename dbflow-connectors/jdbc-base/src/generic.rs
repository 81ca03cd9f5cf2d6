use std::collections::HashMap;

use dbflow_core::{
    config,
    data::DbVendor,
    err::{Context, Result},
};
use serde::{Deserialize, Serialize};

use crate::{with_credentials, CustomDataType, JdbcConnectionConfig, JdbcConnectionPoolConfig};

/// The connection config for any JDBC driver, using a user supplied URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericJdbcConnectionConfig {
    pub url: String,
    pub driver_class_name: String,
    pub user: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub pool: Option<JdbcConnectionPoolConfig>,
    #[serde(default)]
    pub custom_types: Vec<CustomDataType>,
}

/// The connector for databases without dedicated support
#[derive(Default)]
pub struct GenericJdbcConnector;

impl GenericJdbcConnector {
    pub const TYPE: &'static str = "jdbc.generic";
}

impl JdbcConnectionConfig for GenericJdbcConnectionConfig {
    fn vendor(&self) -> DbVendor {
        DbVendor::Generic
    }

    fn get_jdbc_url(&self) -> String {
        self.url.clone()
    }

    fn get_driver_class_name(&self) -> String {
        self.driver_class_name.clone()
    }

    fn get_jdbc_props(&self) -> HashMap<String, String> {
        with_credentials(
            self.properties.clone(),
            self.user.as_ref(),
            self.password.as_ref(),
        )
    }

    fn get_pool_config(&self) -> Option<JdbcConnectionPoolConfig> {
        self.pool.clone()
    }

    fn get_custom_types(&self) -> Vec<CustomDataType> {
        self.custom_types.clone()
    }
}

impl GenericJdbcConnectionConfig {
    pub fn new(url: impl Into<String>, driver_class_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            driver_class_name: driver_class_name.into(),
            user: None,
            password: None,
            properties: HashMap::new(),
            pool: None,
            custom_types: vec![],
        }
    }

    pub fn parse(options: config::Value) -> Result<Self> {
        config::from_value::<Self>(options)
            .context("Failed to parse connection configuration options")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_generic_jdbc_parse_connection_options() {
        let conf = config::parse_config(
            r#"
url: "jdbc:h2:mem:test"
driver_class_name: "org.h2.Driver"
user: sa
properties:
  MODE: Oracle
custom_types:
  - name: CONTACT_DETAILS
    id: 2002
"#,
        )
        .unwrap();

        let parsed = GenericJdbcConnectionConfig::parse(conf).unwrap();

        assert_eq!(parsed.get_jdbc_url(), "jdbc:h2:mem:test");
        assert_eq!(parsed.get_driver_class_name(), "org.h2.Driver");
        assert_eq!(
            parsed.get_jdbc_props(),
            [
                ("MODE".to_string(), "Oracle".to_string()),
                ("user".to_string(), "sa".to_string())
            ]
            .into_iter()
            .collect()
        );
        assert_eq!(
            parsed.get_custom_types(),
            vec![CustomDataType::new("CONTACT_DETAILS", 2002)]
        );
        assert_eq!(parsed.vendor(), DbVendor::Generic);
    }

    #[test]
    fn test_generic_jdbc_parse_missing_url() {
        let conf = config::parse_config("driver_class_name: org.h2.Driver").unwrap();

        assert!(GenericJdbcConnectionConfig::parse(conf).is_err());
    }
}
