// Base for connectors which rely on a JDBC driver for connecting to
// the target database

mod conf;
pub use conf::*;
mod data;
pub use data::*;
mod generic;
pub use generic::*;
