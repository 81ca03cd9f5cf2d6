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

const DRIVER_CLASS_NAME: &str = "oracle.jdbc.driver.OracleDriver";
const JDBC_URL_PREFIX: &str = "jdbc:oracle:thin:@";

/// The connection config for the Oracle JDBC driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleJdbcConnectionConfig {
    /// The host of the database
    pub host: String,
    /// The port of the database
    #[serde(default = "default_port")]
    pub port: u16,
    /// The user used to authenticate against the database
    pub user: Option<String>,
    /// The password used to authenticate against the database
    pub password: Option<String>,
    /// The name of the database instance
    pub instance: Option<String>,
    /// @see https://docs.oracle.com/en/database/oracle/oracle-database/19/jjdbc/data-sources-and-URLs.html
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub pool: Option<JdbcConnectionPoolConfig>,
    #[serde(default)]
    pub custom_types: Vec<CustomDataType>,
}

fn default_port() -> u16 {
    1521
}

impl JdbcConnectionConfig for OracleJdbcConnectionConfig {
    fn vendor(&self) -> DbVendor {
        DbVendor::Oracle
    }

    fn get_jdbc_url(&self) -> String {
        let mut url = format!("{}{}:{}", JDBC_URL_PREFIX, self.host, self.port);

        if let Some(instance) = self.instance.as_ref() {
            url.push(':');
            url.push_str(instance);
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

impl OracleJdbcConnectionConfig {
    pub fn new(host: impl Into<String>, port: u16, instance: Option<String>) -> Self {
        Self {
            host: host.into(),
            port,
            user: None,
            password: None,
            instance,
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
    fn test_oracle_jdbc_parse_connection_options() {
        let conf = config::parse_config(
            r#"
host: localhost
port: 1522
user: system
password: oracle
instance: XE
properties:
  oracle.net.CONNECT_TIMEOUT: "10000"
"#,
        )
        .unwrap();

        let parsed = OracleJdbcConnectionConfig::parse(conf).unwrap();

        assert_eq!(
            parsed,
            OracleJdbcConnectionConfig {
                host: "localhost".into(),
                port: 1522,
                user: Some("system".into()),
                password: Some("oracle".into()),
                instance: Some("XE".into()),
                properties: [(
                    "oracle.net.CONNECT_TIMEOUT".to_string(),
                    "10000".to_string()
                )]
                .into_iter()
                .collect(),
                pool: None,
                custom_types: vec![],
            }
        );
        assert_eq!(parsed.get_jdbc_url(), "jdbc:oracle:thin:@localhost:1522:XE");
        assert_eq!(
            parsed.get_jdbc_props().get("user").map(String::as_str),
            Some("system")
        );
        assert_eq!(
            parsed.get_jdbc_props().get("password").map(String::as_str),
            Some("oracle")
        );
    }

    #[test]
    fn test_oracle_jdbc_default_port_and_no_instance() {
        let conf = config::parse_config("host: db.example.com").unwrap();

        let parsed = OracleJdbcConnectionConfig::parse(conf).unwrap();

        assert_eq!(parsed.port, 1521);
        assert_eq!(parsed.get_jdbc_url(), "jdbc:oracle:thin:@db.example.com:1521");
        assert_eq!(
            parsed.get_driver_class_name(),
            "oracle.jdbc.driver.OracleDriver"
        );
        assert!(parsed.get_jdbc_props().is_empty());
    }

    #[test]
    fn test_oracle_jdbc_parse_missing_host() {
        let conf = config::parse_config("port: 1521").unwrap();

        assert!(OracleJdbcConnectionConfig::parse(conf).is_err());
    }
}
