use dbflow_connectors_jdbc_base::JdbcType;
use dbflow_core::data::{DbVendor, ResolvedDbType};

mod conf;
pub use conf::*;

/// The connector for Microsoft SQL Server, built on their JDBC driver
#[derive(Default)]
pub struct MssqlJdbcConnector;

impl MssqlJdbcConnector {
    pub const TYPE: &'static str = "jdbc.mssql";
    pub const VENDOR: DbVendor = DbVendor::Mssql;

    /// SQL Server type names and the JDBC types they are bound with
    ///
    /// @see https://learn.microsoft.com/en-us/sql/connect/jdbc/understanding-data-type-differences
    pub fn types() -> Vec<ResolvedDbType> {
        vec![
            JdbcType::NVarchar.named("NVARCHAR"),
            JdbcType::LongNVarchar.named("NTEXT"),
            JdbcType::Timestamp.named("DATETIME2"),
            ResolvedDbType::new(-155, "DATETIMEOFFSET"),
            JdbcType::Char.named("UNIQUEIDENTIFIER"),
            JdbcType::Decimal.named("MONEY"),
            JdbcType::LongNVarchar.named("XML"),
            ResolvedDbType::new(-156, "SQL_VARIANT"),
        ]
    }
}
