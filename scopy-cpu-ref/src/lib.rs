//! CPU backends for the [`scopy`] module layer.

mod copy;
mod module;


pub use copy::scopy_ndarray_unrolled;
pub use module::*;

/// Backend running the reference kernels of [`scopy::reference`] unchanged.
pub struct CpuRef {}

/// Backend with an 8-way unrolled unit-stride path that falls back to bulk
/// moves when the result cannot depend on copy order.
pub struct CpuUnrolled {}
