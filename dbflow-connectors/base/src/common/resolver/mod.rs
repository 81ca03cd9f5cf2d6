// Parameter type resolution for query templates

mod default;
pub use default::*;
mod metadata;
pub use metadata::*;
