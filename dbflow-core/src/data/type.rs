use std::{collections::BTreeMap, fmt::Display};

use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};

/// The type id reported for types which are not (yet) resolved.
/// Mirrors `java.sql.Types.OTHER`.
pub const UNRESOLVED_TYPE_ID: i32 = 1111;

/// Name reported by the unknown placeholder type
pub const UNKNOWN_TYPE_NAME: &str = "UNKNOWN";

/// Data type of a query parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumAsInner)]
pub enum DbType {
    /// A fully resolved type which can be bound as is
    Concrete(ResolvedDbType),
    /// A vendor type referenced by name only, resolved through the type catalog
    Dynamic(String),
    /// No type information, resolved through the statement metadata if possible
    Unknown,
}

impl DbType {
    pub fn concrete(id: i32, name: impl Into<String>) -> Self {
        Self::Concrete(ResolvedDbType::new(id, name))
    }

    pub fn dynamic(name: impl Into<String>) -> Self {
        Self::Dynamic(name.into())
    }

    /// Gets the type id, unresolved types report [`UNRESOLVED_TYPE_ID`]
    pub fn id(&self) -> i32 {
        match self {
            DbType::Concrete(t) => t.id,
            DbType::Dynamic(_) | DbType::Unknown => UNRESOLVED_TYPE_ID,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DbType::Concrete(t) => &t.name,
            DbType::Dynamic(name) => name,
            DbType::Unknown => UNKNOWN_TYPE_NAME,
        }
    }

    /// Whether the type can be used to bind a parameter
    pub fn is_resolved(&self) -> bool {
        matches!(self, DbType::Concrete(_))
    }
}

impl From<ResolvedDbType> for DbType {
    fn from(t: ResolvedDbType) -> Self {
        Self::Concrete(t)
    }
}

impl Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::Concrete(t) => write!(f, "{}", t),
            DbType::Dynamic(name) => write!(f, "{} (dynamic)", name),
            DbType::Unknown => f.write_str(UNKNOWN_TYPE_NAME),
        }
    }
}

/// A concrete database type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedDbType {
    /// The type id, using the java.sql.Types constants
    pub id: i32,
    /// The vendor specific type name
    pub name: String,
}

impl ResolvedDbType {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Display for ResolvedDbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Parameter types keyed by their 1-based index in the statement
pub type ParamTypes = BTreeMap<u32, DbType>;
