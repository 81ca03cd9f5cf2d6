use std::collections::HashMap;

use dbflow_core::{
    data::{DbVendor, ResolvedDbType},
    err::{DbAccessError, Error, Result},
};
use dbflow_logging::trace;

use crate::interface::{DbConnection, TypeCatalog};

/// A catalog backed by a fixed list of types.
///
/// Type names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticTypeCatalog {
    types: Vec<ResolvedDbType>,
}

impl StaticTypeCatalog {
    pub fn new(types: Vec<ResolvedDbType>) -> Self {
        Self { types }
    }

    pub fn types(&self) -> &[ResolvedDbType] {
        &self.types
    }

    fn find_by_name(&self, name: &str) -> Option<&ResolvedDbType> {
        self.types
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    fn find_by_id(&self, id: i32, name: &str) -> Option<&ResolvedDbType> {
        let name = name.trim();

        if let Some(found) = self
            .types
            .iter()
            .find(|t| t.id == id && t.name.eq_ignore_ascii_case(name))
        {
            return Some(found);
        }

        // Some drivers do not report type names, in that case the id must be unambiguous
        if name.is_empty() {
            let mut candidates = self.types.iter().filter(|t| t.id == id);
            return match (candidates.next(), candidates.next()) {
                (Some(found), None) => Some(found),
                _ => None,
            };
        }

        None
    }
}

impl TypeCatalog for StaticTypeCatalog {
    fn lookup(&self, con: &dyn DbConnection, name: &str) -> Result<ResolvedDbType> {
        self.find_by_name(name).cloned().ok_or_else(|| {
            DbAccessError::UnknownTypeName {
                vendor: con.vendor(),
                name: name.to_string(),
            }
            .into()
        })
    }

    fn lookup_by_id(
        &self,
        con: &dyn DbConnection,
        id: i32,
        name: &str,
    ) -> Result<ResolvedDbType> {
        self.find_by_id(id, name).cloned().ok_or_else(|| {
            DbAccessError::UnknownTypeId {
                vendor: con.vendor(),
                id,
                name: name.to_string(),
            }
            .into()
        })
    }
}

/// Searches a list of catalogs in order, the first match wins
#[derive(Default)]
pub struct CompositeTypeCatalog {
    catalogs: Vec<Box<dyn TypeCatalog>>,
}

impl CompositeTypeCatalog {
    pub fn new(catalogs: Vec<Box<dyn TypeCatalog>>) -> Self {
        Self { catalogs }
    }

    pub fn with(mut self, catalog: impl TypeCatalog + 'static) -> Self {
        self.catalogs.push(Box::new(catalog));
        self
    }

    fn search(
        &self,
        mut lookup: impl FnMut(&dyn TypeCatalog) -> Result<ResolvedDbType>,
        not_found: impl FnOnce() -> Error,
    ) -> Result<ResolvedDbType> {
        let mut last_err = None;

        for catalog in self.catalogs.iter() {
            match lookup(catalog.as_ref()) {
                Ok(found) => return Ok(found),
                Err(err) => last_err = Some(err),
            }
        }

        Err(last_err.unwrap_or_else(not_found))
    }
}

impl TypeCatalog for CompositeTypeCatalog {
    fn lookup(&self, con: &dyn DbConnection, name: &str) -> Result<ResolvedDbType> {
        self.search(
            |c| c.lookup(con, name),
            || {
                DbAccessError::UnknownTypeName {
                    vendor: con.vendor(),
                    name: name.to_string(),
                }
                .into()
            },
        )
    }

    fn lookup_by_id(
        &self,
        con: &dyn DbConnection,
        id: i32,
        name: &str,
    ) -> Result<ResolvedDbType> {
        self.search(
            |c| c.lookup_by_id(con, id, name),
            || {
                DbAccessError::UnknownTypeId {
                    vendor: con.vendor(),
                    id,
                    name: name.to_string(),
                }
                .into()
            },
        )
    }
}

/// Chooses the vendor specific types based on the connection's vendor.
/// Types not defined by the vendor are searched for in the fallback catalog.
#[derive(Debug, Clone, Default)]
pub struct VendorTypeCatalog {
    vendors: HashMap<DbVendor, StaticTypeCatalog>,
    fallback: StaticTypeCatalog,
}

impl VendorTypeCatalog {
    pub fn new(fallback: StaticTypeCatalog) -> Self {
        Self {
            vendors: HashMap::new(),
            fallback,
        }
    }

    pub fn with_vendor(mut self, vendor: DbVendor, types: Vec<ResolvedDbType>) -> Self {
        self.vendors.insert(vendor, StaticTypeCatalog::new(types));
        self
    }

    pub fn vendor_types(&self, vendor: DbVendor) -> Option<&StaticTypeCatalog> {
        self.vendors.get(&vendor)
    }
}

impl TypeCatalog for VendorTypeCatalog {
    fn lookup(&self, con: &dyn DbConnection, name: &str) -> Result<ResolvedDbType> {
        if let Some(found) = self
            .vendors
            .get(&con.vendor())
            .and_then(|c| c.find_by_name(name))
        {
            trace!("Found {} type '{}'", con.vendor(), found.name);
            return Ok(found.clone());
        }

        self.fallback.lookup(con, name)
    }

    fn lookup_by_id(
        &self,
        con: &dyn DbConnection,
        id: i32,
        name: &str,
    ) -> Result<ResolvedDbType> {
        if let Some(found) = self
            .vendors
            .get(&con.vendor())
            .and_then(|c| c.find_by_id(id, name))
        {
            trace!("Found {} type '{}'", con.vendor(), found.name);
            return Ok(found.clone());
        }

        self.fallback.lookup_by_id(con, id, name)
    }
}

#[cfg(test)]
mod tests {
    use dbflow_core::err::bail;

    use crate::interface::ParameterMetadata;

    use super::*;

    struct VendorConnection(DbVendor);

    impl DbConnection for VendorConnection {
        fn vendor(&self) -> DbVendor {
            self.0
        }

        fn parameter_metadata(&self, _sql: &str) -> Result<Vec<ParameterMetadata>> {
            bail!("Not supported")
        }
    }

    fn standard() -> StaticTypeCatalog {
        StaticTypeCatalog::new(vec![
            ResolvedDbType::new(4, "INTEGER"),
            ResolvedDbType::new(12, "VARCHAR"),
            ResolvedDbType::new(91, "DATE"),
        ])
    }

    #[test]
    fn test_static_catalog_lookup_ignores_case() {
        let con = VendorConnection(DbVendor::Derby);

        assert_eq!(
            standard().lookup(&con, "varchar").unwrap(),
            ResolvedDbType::new(12, "VARCHAR")
        );
        assert_eq!(
            standard().lookup(&con, " Date ").unwrap(),
            ResolvedDbType::new(91, "DATE")
        );
    }

    #[test]
    fn test_static_catalog_lookup_unknown_name() {
        let con = VendorConnection(DbVendor::Mysql);
        let err = standard().lookup(&con, "MY_ENUM").unwrap_err();

        assert_eq!(
            err.downcast_ref::<DbAccessError>(),
            Some(&DbAccessError::UnknownTypeName {
                vendor: DbVendor::Mysql,
                name: "MY_ENUM".into()
            })
        );
    }

    #[test]
    fn test_static_catalog_lookup_by_id() {
        let con = VendorConnection(DbVendor::Derby);
        let catalog = StaticTypeCatalog::new(vec![
            ResolvedDbType::new(12, "VARCHAR"),
            ResolvedDbType::new(12, "VARCHAR2"),
            ResolvedDbType::new(4, "INTEGER"),
        ]);

        assert_eq!(
            catalog.lookup_by_id(&con, 12, "varchar2").unwrap(),
            ResolvedDbType::new(12, "VARCHAR2")
        );
        assert_eq!(
            catalog.lookup_by_id(&con, 4, "").unwrap(),
            ResolvedDbType::new(4, "INTEGER")
        );
        // ambiguous without a name
        assert!(catalog.lookup_by_id(&con, 12, "").is_err());
        assert!(catalog.lookup_by_id(&con, 4, "BIGINT").is_err());
    }

    #[test]
    fn test_composite_catalog_first_match_wins() {
        let con = VendorConnection(DbVendor::Oracle);
        let catalog = CompositeTypeCatalog::default()
            .with(StaticTypeCatalog::new(vec![ResolvedDbType::new(93, "DATE")]))
            .with(standard());

        assert_eq!(
            catalog.lookup(&con, "DATE").unwrap(),
            ResolvedDbType::new(93, "DATE")
        );
        assert_eq!(
            catalog.lookup(&con, "INTEGER").unwrap(),
            ResolvedDbType::new(4, "INTEGER")
        );
        assert_eq!(
            catalog.lookup_by_id(&con, 12, "VARCHAR").unwrap(),
            ResolvedDbType::new(12, "VARCHAR")
        );
    }

    #[test]
    fn test_composite_catalog_not_found() {
        let con = VendorConnection(DbVendor::Oracle);

        let err = CompositeTypeCatalog::default()
            .lookup(&con, "DATE")
            .unwrap_err();
        assert!(err
            .downcast_ref::<DbAccessError>()
            .unwrap()
            .is_catalog_lookup());

        let err = CompositeTypeCatalog::default()
            .with(standard())
            .lookup_by_id(&con, 2005, "CLOB")
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<DbAccessError>(),
            Some(&DbAccessError::UnknownTypeId {
                vendor: DbVendor::Oracle,
                id: 2005,
                name: "CLOB".into()
            })
        );
    }

    #[test]
    fn test_vendor_catalog_uses_connection_vendor() {
        let catalog = VendorTypeCatalog::new(standard())
            .with_vendor(DbVendor::Oracle, vec![ResolvedDbType::new(12, "VARCHAR2")]);

        let oracle = VendorConnection(DbVendor::Oracle);
        let mysql = VendorConnection(DbVendor::Mysql);

        assert_eq!(
            catalog.lookup(&oracle, "VARCHAR2").unwrap(),
            ResolvedDbType::new(12, "VARCHAR2")
        );
        assert!(catalog.lookup(&mysql, "VARCHAR2").is_err());

        // standard types are available to every vendor
        assert_eq!(
            catalog.lookup(&oracle, "INTEGER").unwrap(),
            ResolvedDbType::new(4, "INTEGER")
        );
        assert_eq!(
            catalog.lookup_by_id(&mysql, 91, "DATE").unwrap(),
            ResolvedDbType::new(91, "DATE")
        );
        assert!(catalog.vendor_types(DbVendor::Mssql).is_none());
    }
}
