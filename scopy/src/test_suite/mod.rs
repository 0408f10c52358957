pub mod memory;
pub mod scopy;

#[macro_export]
macro_rules! backend_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        pages = $pages:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            #[allow(unused_imports)]
            use super::*;
            use $crate::{
                api::ModuleNew,
                layouts::{LinearMemory, MemoryDescriptor, Module},
            };

            fn module() -> Module<$backend> {
                let memory: LinearMemory =
                    LinearMemory::new(MemoryDescriptor::new($pages, None)).expect("invalid memory descriptor");
                Module::<$backend>::new(memory)
            }

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(module());
                }
            )+
        }
    };
}

#[macro_export]
macro_rules! cross_backend_test_suite {
    (
        mod $modname:ident,
        backend_ref = $backend_ref:ty,
        backend_test = $backend_test:ty,
        pages = $pages:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            #[allow(unused_imports)]
            use super::*;
            use $crate::{
                api::ModuleNew,
                layouts::{Backend, LinearMemory, MemoryDescriptor, Module},
            };

            fn module<B: Backend>() -> Module<B> {
                let memory: LinearMemory =
                    LinearMemory::new(MemoryDescriptor::new($pages, None)).expect("invalid memory descriptor");
                Module::<B>::new(memory)
            }

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(module::<$backend_ref>(), module::<$backend_test>());
                }
            )+
        }
    };
}
