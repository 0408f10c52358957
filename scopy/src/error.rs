/// Errors raised by [`crate::layouts::LinearMemory`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    #[error("initial size of {initial} pages exceeds maximum of {maximum} pages")]
    InitialExceedsMaximum { initial: usize, maximum: usize },

    #[error("maximum of {maximum} pages exceeds addressable limit of {limit} pages")]
    MaximumExceedsLimit { maximum: usize, limit: usize },

    #[error("cannot grow memory of {pages} pages by {delta} pages: maximum is {maximum} pages")]
    GrowExceedsMaximum { pages: usize, delta: usize, maximum: usize },

    #[error("out of bounds access: {len} bytes at {ptr} exceed memory of {byte_length} bytes")]
    OutOfBounds { ptr: usize, len: usize, byte_length: usize },

    #[error("misaligned view: byte offset {ptr} is not aligned for a {align}-byte element")]
    Misaligned { ptr: usize, align: usize },
}

/// Errors raised by the [`crate::api`] traits on [`crate::layouts::Module`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModuleError {
    #[error("module has not been initialized")]
    Uninitialized,

    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// Convenience alias for `Result<T, ModuleError>`.
pub type Result<T> = std::result::Result<T, ModuleError>;
