mod conf;
pub use conf::*;
mod connection;
pub use connection::*;
