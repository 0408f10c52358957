use crate::layouts::{Backend, Module};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::scopy::scopy_bytes] for reference code.
/// * See [crate::api::Scopy] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ScopyImpl<B: Backend> {
    fn scopy_impl(module: &mut Module<B>, n: isize, x_ptr: usize, stride_x: isize, y_ptr: usize, stride_y: isize) -> usize;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::scopy::scopy_ndarray_bytes] for reference code.
/// * See [crate::api::ScopyNdarray] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
#[allow(clippy::too_many_arguments)]
pub unsafe trait ScopyNdarrayImpl<B: Backend> {
    fn scopy_ndarray_impl(
        module: &mut Module<B>,
        n: isize,
        x_ptr: usize,
        stride_x: isize,
        offset_x: usize,
        y_ptr: usize,
        stride_y: isize,
        offset_y: usize,
    ) -> usize;
}
