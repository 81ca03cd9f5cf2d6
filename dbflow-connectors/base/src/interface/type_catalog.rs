use std::sync::Arc;

use dbflow_core::{data::ResolvedDbType, err::Result};

use super::DbConnection;

/// Resolves vendor types for a connection
pub trait TypeCatalog: Send + Sync {
    /// Finds the type with the supplied name
    fn lookup(&self, con: &dyn DbConnection, name: &str) -> Result<ResolvedDbType>;

    /// Finds the type with the supplied id, using the name to tell apart
    /// vendor types sharing the same id
    fn lookup_by_id(&self, con: &dyn DbConnection, id: i32, name: &str)
        -> Result<ResolvedDbType>;
}

impl<T: TypeCatalog + ?Sized> TypeCatalog for Arc<T> {
    fn lookup(&self, con: &dyn DbConnection, name: &str) -> Result<ResolvedDbType> {
        (**self).lookup(con, name)
    }

    fn lookup_by_id(
        &self,
        con: &dyn DbConnection,
        id: i32,
        name: &str,
    ) -> Result<ResolvedDbType> {
        (**self).lookup_by_id(con, id, name)
    }
}

impl<T: TypeCatalog + ?Sized> TypeCatalog for &T {
    fn lookup(&self, con: &dyn DbConnection, name: &str) -> Result<ResolvedDbType> {
        (**self).lookup(con, name)
    }

    fn lookup_by_id(
        &self,
        con: &dyn DbConnection,
        id: i32,
        name: &str,
    ) -> Result<ResolvedDbType> {
        (**self).lookup_by_id(con, id, name)
    }
}
