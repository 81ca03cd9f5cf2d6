use dbflow_connectors_jdbc_base::JdbcType;
use dbflow_core::data::{DbVendor, ResolvedDbType};

mod conf;
pub use conf::*;

/// The connector for Oracle, built on their JDBC driver
#[derive(Default)]
pub struct OracleJdbcConnector;

impl OracleJdbcConnector {
    pub const TYPE: &'static str = "jdbc.oracle";
    pub const VENDOR: DbVendor = DbVendor::Oracle;

    /// Oracle specific types which are not part of the JDBC standard
    ///
    /// @see https://docs.oracle.com/en/database/oracle/oracle-database/19/jajdb/oracle/jdbc/OracleTypes.html
    pub fn types() -> Vec<ResolvedDbType> {
        vec![
            JdbcType::Numeric.named("NUMBER"),
            JdbcType::Varchar.named("VARCHAR2"),
            JdbcType::NVarchar.named("NVARCHAR2"),
            ResolvedDbType::new(100, "BINARY_FLOAT"),
            ResolvedDbType::new(101, "BINARY_DOUBLE"),
            JdbcType::RowId.named("ROWID"),
            ResolvedDbType::new(-101, "TIMESTAMP WITH TIME ZONE"),
            ResolvedDbType::new(-102, "TIMESTAMP WITH LOCAL TIME ZONE"),
            ResolvedDbType::new(-10, "SYS_REFCURSOR"),
            JdbcType::SqlXml.named("XMLTYPE"),
        ]
    }
}
