use dbflow_connectors_base::common::VendorTypeCatalog;
use dbflow_connectors_jdbc_base::standard_type_catalog;
use dbflow_connectors_jdbc_derby::DerbyJdbcConnector;
use dbflow_connectors_jdbc_mssql::MssqlJdbcConnector;
use dbflow_connectors_jdbc_mysql::MysqlJdbcConnector;
use dbflow_connectors_jdbc_oracle::OracleJdbcConnector;

/// Catalog of the standard JDBC types along with the types of every supported vendor
pub fn default_type_catalog() -> VendorTypeCatalog {
    VendorTypeCatalog::new(standard_type_catalog())
        .with_vendor(DerbyJdbcConnector::VENDOR, DerbyJdbcConnector::types())
        .with_vendor(MysqlJdbcConnector::VENDOR, MysqlJdbcConnector::types())
        .with_vendor(OracleJdbcConnector::VENDOR, OracleJdbcConnector::types())
        .with_vendor(MssqlJdbcConnector::VENDOR, MssqlJdbcConnector::types())
}
