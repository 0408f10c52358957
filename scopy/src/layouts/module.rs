use std::{marker::PhantomData, ptr::NonNull};

use crate::layouts::LinearMemory;

#[allow(clippy::missing_safety_doc)]
pub trait Backend: Sized {
    /// Backend state built by [`crate::api::ModuleInitialize::initialize`].
    type Handle: 'static;
    unsafe fn destroy(handle: NonNull<Self::Handle>);
}

/// A linear memory paired with a backend that runs kernels over it.
///
/// A module starts uninitialized: [`crate::api::ModuleWrite`] and
/// [`crate::api::ModuleRead`] are usable right away, while the compute
/// entry points fail with [`crate::ModuleError::Uninitialized`] until
/// [`crate::api::ModuleInitialize::initialize`] has installed the backend
/// handle.
pub struct Module<B: Backend> {
    ptr: Option<NonNull<B::Handle>>,
    memory: LinearMemory,
    _marker: PhantomData<B>,
}

unsafe impl<B: Backend> Send for Module<B> where B::Handle: Send {}

impl<B: Backend> Module<B> {
    /// Creates an uninitialized module over `memory`.
    #[inline]
    pub fn from_memory(memory: LinearMemory) -> Self {
        Self {
            ptr: None,
            memory,
            _marker: PhantomData,
        }
    }

    /// Installs the backend handle, releasing any previous one.
    ///
    /// # Safety
    /// `ptr` must have been produced so that [`Backend::destroy`] can release it,
    /// and must not be owned by anything else.
    #[inline]
    pub unsafe fn set_handle(&mut self, ptr: NonNull<B::Handle>) {
        if let Some(old) = self.ptr.replace(ptr) {
            unsafe { B::destroy(old) }
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.ptr.is_some()
    }

    #[inline]
    pub fn memory(&self) -> &LinearMemory {
        &self.memory
    }

    #[inline]
    pub fn memory_mut(&mut self) -> &mut LinearMemory {
        &mut self.memory
    }

    /// Releases the backend handle and returns the underlying memory.
    pub fn into_memory(mut self) -> LinearMemory {
        if let Some(ptr) = self.ptr.take() {
            unsafe { B::destroy(ptr) }
        }
        std::mem::replace(&mut self.memory, LinearMemory::empty())
    }
}

impl<B: Backend> Drop for Module<B> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            unsafe { B::destroy(ptr) }
        }
    }
}
