use bytemuck::Pod;

use crate::{
    api::{ModuleRead, ModuleWrite},
    layouts::{Backend, Module},
};

impl<B> ModuleWrite for Module<B>
where
    B: Backend,
{
    fn write<T: Pod>(&mut self, ptr: usize, values: &[T]) -> crate::Result<()> {
        Ok(self.memory_mut().write(ptr, values)?)
    }
}

impl<B> ModuleRead for Module<B>
where
    B: Backend,
{
    fn read<T: Pod>(&self, ptr: usize, values: &mut [T]) -> crate::Result<()> {
        Ok(self.memory().read(ptr, values)?)
    }
}
