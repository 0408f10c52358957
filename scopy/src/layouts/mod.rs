mod memory;
mod module;

pub use memory::*;
pub use module::*;
