use serde::{Deserialize, Serialize};

use crate::data::DbType;

/// A parameter of a parsed query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParam {
    /// 1-based position of the parameter in the statement
    pub index: u32,
    /// The name of the parameter, if it was declared as a named parameter
    pub name: Option<String>,
    /// The declared type of the parameter
    pub r#type: DbType,
}

impl QueryParam {
    pub fn new(index: u32, name: Option<String>, r#type: DbType) -> Self {
        Self {
            index,
            name,
            r#type,
        }
    }

    pub fn named(index: u32, name: impl Into<String>, r#type: DbType) -> Self {
        Self::new(index, Some(name.into()), r#type)
    }

    pub fn positional(index: u32, r#type: DbType) -> Self {
        Self::new(index, None, r#type)
    }
}

/// A caller supplied type for a named parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterType {
    /// Name of the parameter the type applies to
    pub key: String,
    pub r#type: DbType,
}

impl ParameterType {
    pub fn new(key: impl Into<String>, r#type: DbType) -> Self {
        Self {
            key: key.into(),
            r#type,
        }
    }
}
