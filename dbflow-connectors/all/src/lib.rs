mod catalog;
pub use catalog::*;
mod container;
pub use container::*;
