use std::{collections::HashMap, sync::Arc};

use dbflow_connectors_base::common::{
    resolver::{DefaultParamTypeResolver, MetadataParamTypeResolver},
    CompositeTypeCatalog,
};
use dbflow_connectors_jdbc_base::{
    custom_type_catalog, GenericJdbcConnectionConfig, GenericJdbcConnector, JdbcConnectionConfig,
};
use dbflow_connectors_jdbc_derby::{DerbyJdbcConnectionConfig, DerbyJdbcConnector};
use dbflow_connectors_jdbc_mssql::{MssqlJdbcConnectionConfig, MssqlJdbcConnector};
use dbflow_connectors_jdbc_mysql::{MysqlJdbcConnectionConfig, MysqlJdbcConnector};
use dbflow_connectors_jdbc_oracle::{OracleJdbcConnectionConfig, OracleJdbcConnector};
use dbflow_core::{
    config::{self, DataSourceConfig, DbConfig},
    data::DbVendor,
    err::{bail, Context, Result},
};
use dbflow_logging::info;

use crate::default_type_catalog;

/// Resolver of parameter types for a configured data source
pub type DbParamTypeResolver = DefaultParamTypeResolver<
    Arc<CompositeTypeCatalog>,
    MetadataParamTypeResolver<Arc<CompositeTypeCatalog>>,
>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Connectors {
    DerbyJdbc,
    MysqlJdbc,
    OracleJdbc,
    MssqlJdbc,
    GenericJdbc,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionConfigs {
    DerbyJdbc(DerbyJdbcConnectionConfig),
    MysqlJdbc(MysqlJdbcConnectionConfig),
    OracleJdbc(OracleJdbcConnectionConfig),
    MssqlJdbc(MssqlJdbcConnectionConfig),
    GenericJdbc(GenericJdbcConnectionConfig),
}

impl Connectors {
    pub fn from_type(r#type: &str) -> Option<Self> {
        Some(match r#type {
            DerbyJdbcConnector::TYPE => Connectors::DerbyJdbc,
            MysqlJdbcConnector::TYPE => Connectors::MysqlJdbc,
            OracleJdbcConnector::TYPE => Connectors::OracleJdbc,
            MssqlJdbcConnector::TYPE => Connectors::MssqlJdbc,
            GenericJdbcConnector::TYPE => Connectors::GenericJdbc,
            _ => return None,
        })
    }

    pub fn r#type(&self) -> &'static str {
        match self {
            Connectors::DerbyJdbc => DerbyJdbcConnector::TYPE,
            Connectors::MysqlJdbc => MysqlJdbcConnector::TYPE,
            Connectors::OracleJdbc => OracleJdbcConnector::TYPE,
            Connectors::MssqlJdbc => MssqlJdbcConnector::TYPE,
            Connectors::GenericJdbc => GenericJdbcConnector::TYPE,
        }
    }

    pub fn vendor(&self) -> DbVendor {
        match self {
            Connectors::DerbyJdbc => DerbyJdbcConnector::VENDOR,
            Connectors::MysqlJdbc => MysqlJdbcConnector::VENDOR,
            Connectors::OracleJdbc => OracleJdbcConnector::VENDOR,
            Connectors::MssqlJdbc => MssqlJdbcConnector::VENDOR,
            Connectors::GenericJdbc => DbVendor::Generic,
        }
    }

    pub fn parse_options(&self, options: config::Value) -> Result<ConnectionConfigs> {
        Ok(match self {
            Connectors::DerbyJdbc => {
                ConnectionConfigs::DerbyJdbc(DerbyJdbcConnectionConfig::parse(options)?)
            }
            Connectors::MysqlJdbc => {
                ConnectionConfigs::MysqlJdbc(MysqlJdbcConnectionConfig::parse(options)?)
            }
            Connectors::OracleJdbc => {
                ConnectionConfigs::OracleJdbc(OracleJdbcConnectionConfig::parse(options)?)
            }
            Connectors::MssqlJdbc => {
                ConnectionConfigs::MssqlJdbc(MssqlJdbcConnectionConfig::parse(options)?)
            }
            Connectors::GenericJdbc => {
                ConnectionConfigs::GenericJdbc(GenericJdbcConnectionConfig::parse(options)?)
            }
        })
    }
}

impl ConnectionConfigs {
    pub fn as_jdbc(&self) -> &dyn JdbcConnectionConfig {
        match self {
            ConnectionConfigs::DerbyJdbc(c) => c,
            ConnectionConfigs::MysqlJdbc(c) => c,
            ConnectionConfigs::OracleJdbc(c) => c,
            ConnectionConfigs::MssqlJdbc(c) => c,
            ConnectionConfigs::GenericJdbc(c) => c,
        }
    }

    /// Gets the catalog of types available to connections of this config.
    /// Custom types take precedence over the vendor and standard types.
    pub fn type_catalog(&self) -> Arc<CompositeTypeCatalog> {
        Arc::new(
            CompositeTypeCatalog::default()
                .with(custom_type_catalog(self.as_jdbc()))
                .with(default_type_catalog()),
        )
    }

    pub fn param_type_resolver(&self) -> DbParamTypeResolver {
        DefaultParamTypeResolver::with_catalog(self.type_catalog())
    }
}

/// A parsed data source
pub struct DataSource {
    pub id: String,
    pub connector: Connectors,
    pub options: ConnectionConfigs,
    pub resolver: DbParamTypeResolver,
}

/// The data sources of a configuration, keyed by id
pub struct DataSources {
    sources: HashMap<String, DataSource>,
}

impl DataSources {
    pub fn from_config(conf: &DbConfig) -> Result<Self> {
        let mut sources = HashMap::new();

        for source in conf.sources.iter() {
            if sources.contains_key(&source.id) {
                bail!("Duplicate data source id '{}'", source.id);
            }

            sources.insert(source.id.clone(), Self::parse_source(source)?);
        }

        Ok(Self { sources })
    }

    fn parse_source(source: &DataSourceConfig) -> Result<DataSource> {
        let connector = match Connectors::from_type(&source.r#type) {
            Some(c) => c,
            None => bail!(
                "Unknown connector type '{}' for data source '{}'",
                source.r#type,
                source.id
            ),
        };

        let options = connector
            .parse_options(source.options.clone())
            .with_context(|| format!("Failed to parse options of data source '{}'", source.id))?;

        info!(
            "Configured {} data source '{}' using {}",
            connector.vendor(),
            source.id,
            options.as_jdbc().get_driver_class_name()
        );

        Ok(DataSource {
            id: source.id.clone(),
            connector,
            resolver: options.param_type_resolver(),
            options,
        })
    }

    pub fn get(&self, id: &str) -> Option<&DataSource> {
        self.sources.get(id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
