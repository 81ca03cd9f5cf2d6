use dbflow_core::{
    data::{DbType, ParamTypes},
    err::{Context, DbAccessError, Result},
    query::{ParameterType, QueryTemplate},
};
use dbflow_logging::{debug, trace, warn};

use crate::interface::{DbConnection, ParamTypeResolver, TypeCatalog};

use super::MetadataParamTypeResolver;

/// Resolves the dynamic and unknown parameter types of a query template.
///
/// Dynamic types are looked up by name in the type catalog, unknown types
/// are resolved from the statement parameter metadata. Failing to retrieve the
/// metadata is not an error, the parameters keep their declared types instead.
///
/// No state is kept across calls, so an instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct DefaultParamTypeResolver<TCatalog, TMetadata> {
    type_catalog: TCatalog,
    metadata_resolver: TMetadata,
}

impl<TCatalog, TMetadata> DefaultParamTypeResolver<TCatalog, TMetadata>
where
    TCatalog: TypeCatalog,
    TMetadata: ParamTypeResolver,
{
    pub fn new(type_catalog: TCatalog, metadata_resolver: TMetadata) -> Self {
        Self {
            type_catalog,
            metadata_resolver,
        }
    }

    pub fn type_catalog(&self) -> &TCatalog {
        &self.type_catalog
    }

    /// Gets the types of every template parameter from the statement metadata,
    /// falling back to the declared types if the metadata is unavailable.
    /// Catalog lookup failures are not recoverable and are returned.
    fn metadata_types(
        &self,
        con: &dyn DbConnection,
        template: &QueryTemplate,
        hints: &[ParameterType],
    ) -> Result<ParamTypes> {
        debug!(
            "Retrieving parameter metadata from {} connection for: {}",
            con.vendor(),
            template.sql()
        );

        match self
            .metadata_resolver
            .get_parameter_types(con, template, hints)
        {
            Ok(types) => Ok(types),
            Err(err)
                if err
                    .downcast_ref::<DbAccessError>()
                    .map_or(false, DbAccessError::is_catalog_lookup) =>
            {
                Err(err)
            }
            Err(err) => {
                warn!(
                    "Failed to resolve parameter types using metadata, using declared types instead: {:#}",
                    err
                );
                Ok(template.declared_types())
            }
        }
    }
}

impl<TCatalog> DefaultParamTypeResolver<TCatalog, MetadataParamTypeResolver<TCatalog>>
where
    TCatalog: TypeCatalog + Clone,
{
    /// Creates a resolver which uses the same catalog for dynamic types and
    /// for the types reported by the statement metadata
    pub fn with_catalog(type_catalog: TCatalog) -> Self {
        Self::new(
            type_catalog.clone(),
            MetadataParamTypeResolver::new(type_catalog),
        )
    }
}

impl<TCatalog, TMetadata> ParamTypeResolver for DefaultParamTypeResolver<TCatalog, TMetadata>
where
    TCatalog: TypeCatalog,
    TMetadata: ParamTypeResolver,
{
    fn get_parameter_types(
        &self,
        con: &dyn DbConnection,
        template: &QueryTemplate,
        hints: &[ParameterType],
    ) -> Result<ParamTypes> {
        let mut resolved = ParamTypes::new();
        // Retrieved at most once per call, on the first unknown parameter
        let mut metadata_types: Option<ParamTypes> = None;

        for param in template.params() {
            let r#type = match &param.r#type {
                DbType::Unknown => {
                    if metadata_types.is_none() {
                        metadata_types = Some(self.metadata_types(con, template, hints)?);
                    }

                    match metadata_types
                        .as_ref()
                        .and_then(|types| types.get(&param.index))
                    {
                        Some(r#type) => r#type.clone(),
                        None => {
                            warn!(
                                "No type metadata for parameter {}, leaving type unresolved",
                                param.index
                            );
                            DbType::Unknown
                        }
                    }
                }
                DbType::Dynamic(name) => DbType::Concrete(
                    self.type_catalog
                        .lookup(con, name)
                        .with_context(|| {
                            format!(
                                "Failed to resolve type '{}' of parameter {}",
                                name, param.index
                            )
                        })?,
                ),
                r#type @ DbType::Concrete(_) => r#type.clone(),
            };

            trace!("Resolved parameter {} to type {}", param.index, r#type);
            resolved.insert(param.index, r#type);
        }

        Ok(resolved)
    }
}
