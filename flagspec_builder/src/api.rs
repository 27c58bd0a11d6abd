mod core;
mod options;
mod spec;

pub use self::core::*;
pub use options::*;
pub use spec::*;
