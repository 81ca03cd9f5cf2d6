mod r#type;
pub use r#type::*;
mod vendor;
pub use vendor::*;
