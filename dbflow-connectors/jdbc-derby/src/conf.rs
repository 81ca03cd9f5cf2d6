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

const DRIVER_CLASS_NAME: &str = "org.apache.derby.jdbc.EmbeddedDriver";
const JDBC_URL_PREFIX: &str = "jdbc:derby:";

/// Where the embedded Derby database is stored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerbySubSubProtocol {
    Directory,
    Memory,
    Classpath,
    Jar,
}

impl DerbySubSubProtocol {
    fn name(&self) -> &'static str {
        match self {
            DerbySubSubProtocol::Directory => "directory",
            DerbySubSubProtocol::Memory => "memory",
            DerbySubSubProtocol::Classpath => "classpath",
            DerbySubSubProtocol::Jar => "jar",
        }
    }
}

/// The connection config for the embedded Derby JDBC driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerbyJdbcConnectionConfig {
    /// The name of the database, or its path for directory databases
    pub database: String,
    pub sub_sub_protocol: Option<DerbySubSubProtocol>,
    /// Creates the database if it does not exist
    #[serde(default)]
    pub create: bool,
    pub user: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub pool: Option<JdbcConnectionPoolConfig>,
    #[serde(default)]
    pub custom_types: Vec<CustomDataType>,
}

impl JdbcConnectionConfig for DerbyJdbcConnectionConfig {
    fn vendor(&self) -> DbVendor {
        DbVendor::Derby
    }

    fn get_jdbc_url(&self) -> String {
        let mut url = JDBC_URL_PREFIX.to_string();

        if let Some(protocol) = self.sub_sub_protocol {
            url.push_str(protocol.name());
            url.push(':');
        }

        url.push_str(&self.database);

        if self.create {
            url.push_str(";create=true");
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

impl DerbyJdbcConnectionConfig {
    pub fn new(
        database: impl Into<String>,
        sub_sub_protocol: Option<DerbySubSubProtocol>,
        create: bool,
    ) -> Self {
        Self {
            database: database.into(),
            sub_sub_protocol,
            create,
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
    fn test_derby_jdbc_parse_connection_options() {
        let conf = config::parse_config(
            r#"
database: muleEmbeddedDB
sub_sub_protocol: memory
create: true
"#,
        )
        .unwrap();

        let parsed = DerbyJdbcConnectionConfig::parse(conf).unwrap();

        assert_eq!(
            parsed,
            DerbyJdbcConnectionConfig::new(
                "muleEmbeddedDB",
                Some(DerbySubSubProtocol::Memory),
                true
            )
        );
        assert_eq!(
            parsed.get_jdbc_url(),
            "jdbc:derby:memory:muleEmbeddedDB;create=true"
        );
        assert_eq!(
            parsed.get_driver_class_name(),
            "org.apache.derby.jdbc.EmbeddedDriver"
        );
    }

    #[test]
    fn test_derby_jdbc_url_directory_database() {
        let conf = DerbyJdbcConnectionConfig::new("target/planets", None, false);

        assert_eq!(conf.get_jdbc_url(), "jdbc:derby:target/planets");
    }

    #[test]
    fn test_derby_jdbc_parse_invalid_protocol() {
        let conf = config::parse_config(
            r#"
database: db
sub_sub_protocol: ftp
"#,
        )
        .unwrap();

        assert!(DerbyJdbcConnectionConfig::parse(conf).is_err());
    }
}
