use dbflow_core::{data::DbVendor, err::Result};
use serde::{Deserialize, Serialize};

/// An open connection to a database
pub trait DbConnection {
    /// The vendor of the database on the other end of the connection
    fn vendor(&self) -> DbVendor;

    /// Prepares the supplied statement and describes its parameters,
    /// in the order they appear in the statement.
    ///
    /// Drivers which cannot introspect parameters return an error.
    fn parameter_metadata(&self, sql: &str) -> Result<Vec<ParameterMetadata>>;
}

/// The driver's description of a single statement parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    /// The java.sql.Types id of the parameter type
    pub type_id: i32,
    /// The vendor specific type name
    pub type_name: String,
}

impl ParameterMetadata {
    pub fn new(type_id: i32, type_name: impl Into<String>) -> Self {
        Self {
            type_id,
            type_name: type_name.into(),
        }
    }
}
