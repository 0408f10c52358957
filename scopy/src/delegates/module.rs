use crate::{
    api::{ModuleInitialize, ModuleNew},
    layouts::{Backend, LinearMemory, Module},
    oep::ModuleInitializeImpl,
};

impl<B> ModuleNew<B> for Module<B>
where
    B: Backend,
{
    fn new(memory: LinearMemory) -> Self {
        Module::from_memory(memory)
    }
}

impl<B> ModuleInitialize for Module<B>
where
    B: Backend + ModuleInitializeImpl<B>,
{
    fn initialize(&mut self) -> crate::Result<()> {
        let handle = B::initialize_impl(self.memory())?;
        // SAFETY: the handle was just produced by the backend and is owned by nobody else.
        unsafe { self.set_handle(handle) };
        log::debug!(
            "initialized {} module over {} pages",
            std::any::type_name::<B>(),
            self.memory().pages()
        );
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        Module::is_initialized(self)
    }
}
