use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use dbflow_connectors_base::interface::{DbConnection, ParameterMetadata};
use dbflow_core::{
    data::DbVendor,
    err::{DbAccessError, Result},
};
use dbflow_logging::debug;

use crate::MemoryDatabase;

/// Connection to an in-memory database
#[derive(Debug, Clone)]
pub struct MemoryConnection {
    database: Arc<MemoryDatabase>,
    metadata_calls: Arc<AtomicUsize>,
}

impl MemoryConnection {
    pub fn new(database: MemoryDatabase) -> Self {
        Self {
            database: Arc::new(database),
            metadata_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn database(&self) -> &MemoryDatabase {
        &self.database
    }

    /// The number of times statement parameters were described on this connection
    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }
}

impl DbConnection for MemoryConnection {
    fn vendor(&self) -> DbVendor {
        self.database.vendor
    }

    fn parameter_metadata(&self, sql: &str) -> Result<Vec<ParameterMetadata>> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        debug!("Describing parameters of statement: {}", sql);

        if !self.database.parameter_metadata {
            return Err(DbAccessError::MetadataUnsupported(self.database.vendor).into());
        }

        match self.database.statement(sql) {
            Some(statement) => Ok(statement.params.clone()),
            None => Err(DbAccessError::Prepare {
                sql: sql.to_string(),
                message: "Table/View does not exist".into(),
            }
            .into()),
        }
    }
}
