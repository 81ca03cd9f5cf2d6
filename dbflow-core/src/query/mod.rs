mod param;
pub use param::*;
mod template;
pub use template::*;
