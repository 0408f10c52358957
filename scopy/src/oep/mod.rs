mod module;
mod scopy;

pub use module::*;
pub use scopy::*;
