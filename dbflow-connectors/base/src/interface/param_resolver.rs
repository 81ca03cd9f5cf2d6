use std::sync::Arc;

use dbflow_core::{
    data::ParamTypes,
    err::Result,
    query::{ParameterType, QueryTemplate},
};

use super::DbConnection;

/// Determines the types of the parameters of a query
pub trait ParamTypeResolver: Send + Sync {
    /// Gets the type of each parameter of the query template, keyed by parameter index
    fn get_parameter_types(
        &self,
        con: &dyn DbConnection,
        template: &QueryTemplate,
        hints: &[ParameterType],
    ) -> Result<ParamTypes>;
}

impl<T: ParamTypeResolver + ?Sized> ParamTypeResolver for Arc<T> {
    fn get_parameter_types(
        &self,
        con: &dyn DbConnection,
        template: &QueryTemplate,
        hints: &[ParameterType],
    ) -> Result<ParamTypes> {
        (**self).get_parameter_types(con, template, hints)
    }
}

impl<T: ParamTypeResolver + ?Sized> ParamTypeResolver for &T {
    fn get_parameter_types(
        &self,
        con: &dyn DbConnection,
        template: &QueryTemplate,
        hints: &[ParameterType],
    ) -> Result<ParamTypes> {
        (**self).get_parameter_types(con, template, hints)
    }
}
