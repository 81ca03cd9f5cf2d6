pub use anyhow::{anyhow, bail, Context, Error, Result};

use crate::data::DbVendor;

/// Database access failures raised by dbflow itself.
///
/// These are carried inside [`Error`] so they can be recovered with
/// `err.downcast_ref::<DbAccessError>()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DbAccessError {
    /// A symbolic type name could not be resolved for the vendor
    #[error("Unknown data type '{name}' for {vendor} connection")]
    UnknownTypeName { vendor: DbVendor, name: String },

    /// A type id reported by the driver could not be resolved for the vendor
    #[error("Unknown data type id {id} ('{name}') for {vendor} connection")]
    UnknownTypeId {
        vendor: DbVendor,
        id: i32,
        name: String,
    },

    /// The connection cannot describe statement parameters
    #[error("Parameter metadata is not supported by {0} connection")]
    MetadataUnsupported(DbVendor),

    /// The statement could not be prepared for introspection
    #[error("Failed to prepare statement '{sql}': {message}")]
    Prepare { sql: String, message: String },

    /// The query template is malformed
    #[error("Invalid query template: {0}")]
    InvalidTemplate(String),
}

impl DbAccessError {
    /// Returns `true` if this is a type catalog miss (either by name or by id)
    pub fn is_catalog_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownTypeName { .. } | Self::UnknownTypeId { .. }
        )
    }

    /// Returns `true` if the failure came from statement parameter introspection
    pub fn is_metadata_introspection(&self) -> bool {
        matches!(self, Self::MetadataUnsupported(_) | Self::Prepare { .. })
    }
}
