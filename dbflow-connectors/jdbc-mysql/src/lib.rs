use dbflow_connectors_jdbc_base::JdbcType;
use dbflow_core::data::{DbVendor, ResolvedDbType};

mod conf;
pub use conf::*;

/// The connector for Mysql, built on their JDBC driver
#[derive(Default)]
pub struct MysqlJdbcConnector;

impl MysqlJdbcConnector {
    pub const TYPE: &'static str = "jdbc.mysql";
    pub const VENDOR: DbVendor = DbVendor::Mysql;

    /// Mysql type names as reported by Connector/J
    pub fn types() -> Vec<ResolvedDbType> {
        vec![
            JdbcType::SmallInt.named("TINYINT UNSIGNED"),
            JdbcType::BigInt.named("INT UNSIGNED"),
            JdbcType::Decimal.named("BIGINT UNSIGNED"),
            JdbcType::Timestamp.named("DATETIME"),
            JdbcType::LongVarchar.named("TEXT"),
            JdbcType::LongVarchar.named("LONGTEXT"),
            JdbcType::LongVarchar.named("JSON"),
            JdbcType::Char.named("ENUM"),
            JdbcType::Char.named("SET"),
            JdbcType::Date.named("YEAR"),
        ]
    }
}
