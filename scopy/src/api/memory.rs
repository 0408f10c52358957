use bytemuck::Pod;

/// Copies caller data into module memory at a byte offset.
pub trait ModuleWrite {
    fn write<T: Pod>(&mut self, ptr: usize, values: &[T]) -> crate::Result<()>;
}

/// Copies module memory at a byte offset back out into caller storage.
pub trait ModuleRead {
    fn read<T: Pod>(&self, ptr: usize, values: &mut [T]) -> crate::Result<()>;
}
