mod memory;
mod module;
mod scopy;
