mod memory;
mod module;
mod scopy;

pub use memory::*;
pub use module::*;
pub use scopy::*;
