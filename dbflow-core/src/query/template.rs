use std::collections::HashSet;

use serde::Serialize;

use crate::{
    data::ParamTypes,
    err::{DbAccessError, Result},
};

use super::QueryParam;

/// A parsed SQL statement along with its parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryTemplate {
    sql: String,
    params: Vec<QueryParam>,
}

impl QueryTemplate {
    /// Creates a new query template.
    /// Parameter indexes must be unique and start from 1.
    pub fn new(sql: impl Into<String>, params: Vec<QueryParam>) -> Result<Self> {
        let mut seen = HashSet::new();

        for param in params.iter() {
            if param.index == 0 {
                return Err(DbAccessError::InvalidTemplate(
                    "parameter indexes must start from 1".into(),
                )
                .into());
            }

            if !seen.insert(param.index) {
                return Err(DbAccessError::InvalidTemplate(format!(
                    "duplicate parameter index {}",
                    param.index
                ))
                .into());
            }
        }

        Ok(Self {
            sql: sql.into(),
            params,
        })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[QueryParam] {
        &self.params
    }

    /// Gets the types as declared on the template itself
    pub fn declared_types(&self) -> ParamTypes {
        self.params
            .iter()
            .map(|p| (p.index, p.r#type.clone()))
            .collect()
    }
}
