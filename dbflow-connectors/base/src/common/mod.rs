pub mod resolver;
mod type_catalog;
pub use type_catalog::*;
