mod connection;
pub use connection::*;
mod type_catalog;
pub use type_catalog::*;
mod param_resolver;
pub use param_resolver::*;
