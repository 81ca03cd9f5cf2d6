use dbflow_core::{
    data::{DbType, ParamTypes, ResolvedDbType},
    err::{Context, Result},
    query::{ParameterType, QueryTemplate},
};
use dbflow_logging::{debug, trace, warn};
use itertools::Itertools;

use crate::interface::{DbConnection, ParamTypeResolver, TypeCatalog};

/// Resolves parameter types by asking the driver to describe the prepared statement.
///
/// Caller supplied types for named parameters take precedence over the metadata.
/// The driver is only consulted when an unknown parameter has no supplied type.
#[derive(Debug, Clone)]
pub struct MetadataParamTypeResolver<TCatalog> {
    type_catalog: TCatalog,
}

impl<TCatalog: TypeCatalog> MetadataParamTypeResolver<TCatalog> {
    pub fn new(type_catalog: TCatalog) -> Self {
        Self { type_catalog }
    }

    fn hinted_type(
        &self,
        con: &dyn DbConnection,
        hint: &ParameterType,
    ) -> Result<Option<ResolvedDbType>> {
        Ok(match &hint.r#type {
            DbType::Concrete(t) => Some(t.clone()),
            DbType::Dynamic(name) => Some(
                self.type_catalog
                    .lookup(con, name)
                    .with_context(|| format!("Failed to resolve type of parameter '{}'", hint.key))?,
            ),
            DbType::Unknown => None,
        })
    }

    /// Resolves the supplied types of the template's named parameters
    fn hinted_types(
        &self,
        con: &dyn DbConnection,
        template: &QueryTemplate,
        hints: &[ParameterType],
    ) -> Result<ParamTypes> {
        let mut types = ParamTypes::new();

        for param in template.params() {
            let hint = match param
                .name
                .as_deref()
                .and_then(|name| hints.iter().find(|h| h.key == name))
            {
                Some(hint) => hint,
                None => continue,
            };

            if let Some(hinted) = self.hinted_type(con, hint)? {
                trace!("Using supplied type {} for parameter {}", hinted, param.index);
                types.insert(param.index, DbType::Concrete(hinted));
            }
        }

        Ok(types)
    }
}

impl<TCatalog: TypeCatalog> ParamTypeResolver for MetadataParamTypeResolver<TCatalog> {
    fn get_parameter_types(
        &self,
        con: &dyn DbConnection,
        template: &QueryTemplate,
        hints: &[ParameterType],
    ) -> Result<ParamTypes> {
        let mut types = self.hinted_types(con, template, hints)?;

        if template
            .params()
            .iter()
            .all(|p| p.r#type != DbType::Unknown || types.contains_key(&p.index))
        {
            debug!("Every unknown parameter has a supplied type, skipping statement metadata");
            return Ok(types);
        }

        let metadata = match con
            .parameter_metadata(template.sql())
            .context("Failed to retrieve statement parameter metadata")
        {
            Ok(metadata) => metadata,
            Err(err) if !types.is_empty() => {
                warn!("Using supplied parameter types only: {:#}", err);
                return Ok(types);
            }
            Err(err) => return Err(err),
        };

        debug!(
            "Statement parameter metadata: [{}]",
            metadata
                .iter()
                .map(|m| format!("{} ({})", m.type_name, m.type_id))
                .join(", ")
        );

        for param in template.params() {
            if types.contains_key(&param.index) {
                continue;
            }

            let meta = match metadata.get(param.index as usize - 1) {
                Some(meta) => meta,
                None => {
                    debug!("No metadata reported for parameter {}", param.index);
                    continue;
                }
            };

            // Drivers may report types which are missing from the catalog
            let resolved = self
                .type_catalog
                .lookup_by_id(con, meta.type_id, &meta.type_name)
                .unwrap_or_else(|_| ResolvedDbType::new(meta.type_id, meta.type_name.clone()));

            types.insert(param.index, DbType::Concrete(resolved));
        }

        Ok(types)
    }
}
