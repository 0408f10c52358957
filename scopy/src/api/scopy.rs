/// Copies values from the `f32` vector at byte offset `x_ptr` into the one at
/// `y_ptr`, starting at the first (non-negative stride) or last (negative
/// stride) addressed element of each.
///
/// Returns `y_ptr`. Fails only if the module has not been initialized.
pub trait Scopy {
    fn scopy(&mut self, n: isize, x_ptr: usize, stride_x: isize, y_ptr: usize, stride_y: isize) -> crate::Result<usize>;
}

/// Copies values from the `f32` vector at byte offset `x_ptr` into the one at
/// `y_ptr`, starting at element `offset_x` of `x` and `offset_y` of `y`.
///
/// Returns `y_ptr`. Fails only if the module has not been initialized.
#[allow(clippy::too_many_arguments)]
pub trait ScopyNdarray {
    fn scopy_ndarray(
        &mut self,
        n: isize,
        x_ptr: usize,
        stride_x: isize,
        offset_x: usize,
        y_ptr: usize,
        stride_y: isize,
        offset_y: usize,
    ) -> crate::Result<usize>;
}
