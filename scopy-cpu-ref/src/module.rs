//! Backend handles and module initialization for [`CpuRef`](crate::CpuRef)
//! and [`CpuUnrolled`](crate::CpuUnrolled).
//!
//! Neither backend precomputes anything, so their handles are empty markers
//! whose presence records that the module went through initialization.

use std::ptr::NonNull;

use scopy::{
    layouts::{Backend, LinearMemory},
    oep::ModuleInitializeImpl,
};

use crate::{CpuRef, CpuUnrolled};

pub struct CpuRefHandle {}

pub struct CpuUnrolledHandle {}

impl Backend for CpuRef {
    type Handle = CpuRefHandle;
    unsafe fn destroy(handle: NonNull<Self::Handle>) {
        unsafe {
            drop(Box::from_raw(handle.as_ptr()));
        }
    }
}

impl Backend for CpuUnrolled {
    type Handle = CpuUnrolledHandle;
    unsafe fn destroy(handle: NonNull<Self::Handle>) {
        unsafe {
            drop(Box::from_raw(handle.as_ptr()));
        }
    }
}

/// # Safety
///
/// The returned pointer comes from a leaked `Box` and is released by [`Backend::destroy`].
unsafe impl ModuleInitializeImpl<Self> for CpuRef {
    fn initialize_impl(memory: &LinearMemory) -> scopy::Result<NonNull<CpuRefHandle>> {
        log::trace!("cpu_ref: initializing over {} bytes", memory.byte_length());
        Ok(NonNull::from(Box::leak(Box::new(CpuRefHandle {}))))
    }
}

/// # Safety
///
/// The returned pointer comes from a leaked `Box` and is released by [`Backend::destroy`].
unsafe impl ModuleInitializeImpl<Self> for CpuUnrolled {
    fn initialize_impl(memory: &LinearMemory) -> scopy::Result<NonNull<CpuUnrolledHandle>> {
        log::trace!("cpu_unrolled: initializing over {} bytes", memory.byte_length());
        Ok(NonNull::from(Box::leak(Box::new(CpuUnrolledHandle {}))))
    }
}
