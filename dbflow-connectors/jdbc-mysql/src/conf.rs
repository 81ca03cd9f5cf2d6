use std::collections::{BTreeMap, HashMap};

use dbflow_core::{
    config,
    data::DbVendor,
    err::{Context, Result},
};
use serde::{Deserialize, Serialize};

use dbflow_connectors_jdbc_base::{
    with_credentials, CustomDataType, JdbcConnectionConfig, JdbcConnectionPoolConfig,
};

const DRIVER_CLASS_NAME: &str = "com.mysql.jdbc.Driver";
const JDBC_URL_PREFIX: &str = "jdbc:mysql://";

/// The connection config for the Mysql JDBC driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MysqlJdbcConnectionConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// The database to connect to, if not set the connection is not bound to a database
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Appended to the connection URL
    /// @see https://dev.mysql.com/doc/connector-j/8.0/en/connector-j-reference-configuration-properties.html
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub pool: Option<JdbcConnectionPoolConfig>,
    #[serde(default)]
    pub custom_types: Vec<CustomDataType>,
}

fn default_port() -> u16 {
    3306
}

impl JdbcConnectionConfig for MysqlJdbcConnectionConfig {
    fn vendor(&self) -> DbVendor {
        DbVendor::Mysql
    }

    fn get_jdbc_url(&self) -> String {
        let mut url = format!(
            "{}{}:{}/{}",
            JDBC_URL_PREFIX,
            self.host,
            self.port,
            self.database.as_deref().unwrap_or_default()
        );

        if !self.properties.is_empty() {
            url.push('?');
            url.push_str(
                &self
                    .properties
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join("&"),
            );
        }

        url
    }

    fn get_driver_class_name(&self) -> String {
        DRIVER_CLASS_NAME.into()
    }

    fn get_jdbc_props(&self) -> HashMap<String, String> {
        with_credentials(HashMap::new(), self.user.as_ref(), self.password.as_ref())
    }

    fn get_pool_config(&self) -> Option<JdbcConnectionPoolConfig> {
        self.pool.clone()
    }

    fn get_custom_types(&self) -> Vec<CustomDataType> {
        self.custom_types.clone()
    }
}

impl MysqlJdbcConnectionConfig {
    pub fn new(host: impl Into<String>, port: u16, database: Option<String>) -> Self {
        Self {
            host: host.into(),
            port,
            database,
            user: None,
            password: None,
            properties: BTreeMap::new(),
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
    fn test_mysql_jdbc_parse_connection_options() {
        let conf = config::parse_config(
            r#"
host: localhost
database: planets
user: root
password: secret
properties:
  useSSL: "false"
  serverTimezone: UTC
"#,
        )
        .unwrap();

        let parsed = MysqlJdbcConnectionConfig::parse(conf).unwrap();

        assert_eq!(parsed.port, 3306);
        assert_eq!(
            parsed.get_jdbc_url(),
            "jdbc:mysql://localhost:3306/planets?serverTimezone=UTC&useSSL=false"
        );
        assert_eq!(
            parsed.get_jdbc_props(),
            [
                ("user".to_string(), "root".to_string()),
                ("password".to_string(), "secret".to_string())
            ]
            .into_iter()
            .collect()
        );
    }

    #[test]
    fn test_mysql_jdbc_url_without_database() {
        let conf = MysqlJdbcConnectionConfig::new("10.0.0.5", 3307, None);

        assert_eq!(conf.get_jdbc_url(), "jdbc:mysql://10.0.0.5:3307/");
        assert_eq!(conf.get_driver_class_name(), "com.mysql.jdbc.Driver");
    }
}
