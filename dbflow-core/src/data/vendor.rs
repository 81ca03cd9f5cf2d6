use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The database vendors with dedicated connection and type handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbVendor {
    Derby,
    Mysql,
    Oracle,
    Mssql,
    /// Any other JDBC compliant database
    Generic,
}

impl DbVendor {
    pub fn name(&self) -> &'static str {
        match self {
            DbVendor::Derby => "derby",
            DbVendor::Mysql => "mysql",
            DbVendor::Oracle => "oracle",
            DbVendor::Mssql => "mssql",
            DbVendor::Generic => "generic",
        }
    }
}

impl Display for DbVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
