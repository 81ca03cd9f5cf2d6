use std::collections::HashMap;

use dbflow_core::{
    config,
    data::DbVendor,
    err::{Context, Result},
};
use serde::{Deserialize, Serialize};

use dbflow_connectors_jdbc_base::{
    with_credentials, CustomDataType, JdbcConnectionConfig, JdbcConnectionPoolConfig,
};

const DRIVER_CLASS_NAME: &str = "com.microsoft.sqlserver.jdbc.SQLServerDriver";
const JDBC_URL_PREFIX: &str = "jdbc:sqlserver://";

/// The connection config for the Mssql JDBC driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MssqlJdbcConnectionConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// The named instance to connect to on the host
    pub instance_name: Option<String>,
    pub database_name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// @see https://learn.microsoft.com/en-us/sql/connect/jdbc/setting-the-connection-properties
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub pool: Option<JdbcConnectionPoolConfig>,
    #[serde(default)]
    pub custom_types: Vec<CustomDataType>,
}

fn default_port() -> u16 {
    1433
}

impl JdbcConnectionConfig for MssqlJdbcConnectionConfig {
    fn vendor(&self) -> DbVendor {
        DbVendor::Mssql
    }

    fn get_jdbc_url(&self) -> String {
        let mut url = format!("{}{}", JDBC_URL_PREFIX, self.host);

        if let Some(instance) = self.instance_name.as_ref() {
            url.push('\\');
            url.push_str(instance);
        }

        url.push_str(&format!(":{}", self.port));

        if let Some(database) = self.database_name.as_ref() {
            url.push_str(";databaseName=");
            url.push_str(database);
        }

        url
    }

    fn get_driver_class_name(&self) -> String {
        DRIVER_CLASS_NAME.into()
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

impl MssqlJdbcConnectionConfig {
    pub fn new(host: impl Into<String>, port: u16, database_name: Option<String>) -> Self {
        Self {
            host: host.into(),
            port,
            instance_name: None,
            database_name,
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
    fn test_mssql_jdbc_parse_connection_options() {
        let conf = config::parse_config(
            r#"
host: localhost
instance_name: SQLEXPRESS
database_name: planets
user: sa
password: yourStrong(!)Password
properties:
  encrypt: "false"
"#,
        )
        .unwrap();

        let parsed = MssqlJdbcConnectionConfig::parse(conf).unwrap();

        assert_eq!(
            parsed.get_jdbc_url(),
            "jdbc:sqlserver://localhost\\SQLEXPRESS:1433;databaseName=planets"
        );
        assert_eq!(
            parsed.get_jdbc_props(),
            [
                ("encrypt".to_string(), "false".to_string()),
                ("user".to_string(), "sa".to_string()),
                ("password".to_string(), "yourStrong(!)Password".to_string())
            ]
            .into_iter()
            .collect()
        );
    }

    #[test]
    fn test_mssql_jdbc_url_defaults() {
        let conf = MssqlJdbcConnectionConfig::new("db", 1433, None);

        assert_eq!(conf.get_jdbc_url(), "jdbc:sqlserver://db:1433");
        assert_eq!(
            conf.get_driver_class_name(),
            "com.microsoft.sqlserver.jdbc.SQLServerDriver"
        );
    }
}
