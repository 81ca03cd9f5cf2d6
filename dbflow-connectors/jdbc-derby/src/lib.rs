use dbflow_connectors_jdbc_base::JdbcType;
use dbflow_core::data::{DbVendor, ResolvedDbType};

mod conf;
pub use conf::*;

/// The connector for Apache Derby, using the embedded driver
#[derive(Default)]
pub struct DerbyJdbcConnector;

impl DerbyJdbcConnector {
    pub const TYPE: &'static str = "jdbc.derby";
    pub const VENDOR: DbVendor = DbVendor::Derby;

    /// Derby type names which differ from the JDBC names
    pub fn types() -> Vec<ResolvedDbType> {
        vec![
            JdbcType::Boolean.named("BOOLEAN"),
            JdbcType::LongVarchar.named("LONG VARCHAR"),
            JdbcType::SqlXml.named("XML"),
        ]
    }
}
