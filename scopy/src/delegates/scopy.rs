use crate::{
    ModuleError,
    api::{Scopy, ScopyNdarray},
    layouts::{Backend, Module},
    oep::{ScopyImpl, ScopyNdarrayImpl},
};

impl<B> Scopy for Module<B>
where
    B: Backend + ScopyImpl<B>,
{
    fn scopy(&mut self, n: isize, x_ptr: usize, stride_x: isize, y_ptr: usize, stride_y: isize) -> crate::Result<usize> {
        if !self.is_initialized() {
            return Err(ModuleError::Uninitialized);
        }
        Ok(B::scopy_impl(self, n, x_ptr, stride_x, y_ptr, stride_y))
    }
}

impl<B> ScopyNdarray for Module<B>
where
    B: Backend + ScopyNdarrayImpl<B>,
{
    fn scopy_ndarray(
        &mut self,
        n: isize,
        x_ptr: usize,
        stride_x: isize,
        offset_x: usize,
        y_ptr: usize,
        stride_y: isize,
        offset_y: usize,
    ) -> crate::Result<usize> {
        if !self.is_initialized() {
            return Err(ModuleError::Uninitialized);
        }
        Ok(B::scopy_ndarray_impl(
            self, n, x_ptr, stride_x, offset_x, y_ptr, stride_y, offset_y,
        ))
    }
}
