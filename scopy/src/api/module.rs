use crate::layouts::{Backend, LinearMemory};

/// Instantiate a new [crate::layouts::Module] over a linear memory.
pub trait ModuleNew<B: Backend> {
    fn new(memory: LinearMemory) -> Self;
}

/// Prepares a [crate::layouts::Module] for computation.
pub trait ModuleInitialize {
    fn initialize(&mut self) -> crate::Result<()>;

    /// Runs [`ModuleInitialize::initialize`] and hands its outcome to `callback`.
    fn initialize_with<F>(&mut self, callback: F)
    where
        F: FnOnce(crate::Result<()>),
    {
        callback(self.initialize())
    }

    fn is_initialized(&self) -> bool;
}
