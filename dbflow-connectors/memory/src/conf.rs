use dbflow_connectors_base::interface::ParameterMetadata;
use dbflow_core::{
    config,
    data::DbVendor,
    err::{Context, Result},
};
use serde::{Deserialize, Serialize};

/// An in-memory database which knows the parameters of a fixed set of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryDatabase {
    /// The vendor the database pretends to be
    pub vendor: DbVendor,
    /// Whether the statement parameters can be described
    #[serde(default = "default_parameter_metadata")]
    pub parameter_metadata: bool,
    #[serde(default)]
    pub statements: Vec<MemoryStatement>,
}

fn default_parameter_metadata() -> bool {
    true
}

/// A statement which can be prepared against the in-memory database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStatement {
    pub sql: String,
    #[serde(default)]
    pub params: Vec<ParameterMetadata>,
}

impl MemoryStatement {
    pub fn new(sql: impl Into<String>, params: Vec<ParameterMetadata>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

impl MemoryDatabase {
    pub fn new(vendor: DbVendor) -> Self {
        Self {
            vendor,
            parameter_metadata: true,
            statements: vec![],
        }
    }

    pub fn without_parameter_metadata(mut self) -> Self {
        self.parameter_metadata = false;
        self
    }

    pub fn with_statement(mut self, statement: MemoryStatement) -> Self {
        self.statements.push(statement);
        self
    }

    pub fn parse(options: config::Value) -> Result<Self> {
        config::from_value::<Self>(options)
            .context("Failed to parse connection configuration options")
    }

    pub(crate) fn statement(&self, sql: &str) -> Option<&MemoryStatement> {
        self.statements.iter().find(|s| s.sql.trim() == sql.trim())
    }
}
