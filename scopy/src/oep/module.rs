use std::ptr::NonNull;

use crate::layouts::{Backend, LinearMemory};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ModuleInitialize] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ModuleInitializeImpl<B: Backend> {
    /// Builds the backend handle for a module over `memory`.
    fn initialize_impl(memory: &LinearMemory) -> crate::Result<NonNull<B::Handle>>;
}
