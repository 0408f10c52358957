use crate::{
    F32_BYTES, MemoryError, ModuleError,
    api::{ModuleInitialize, ModuleRead, ModuleWrite, Scopy},
    layouts::{Backend, Module, PAGE_SIZE},
};

pub fn test_module_write_read<B: Backend>(mut module: Module<B>)
where
    Module<B>: ModuleWrite + ModuleRead,
{
    let byte_length: usize = module.memory().byte_length();

    // usable before initialization
    module.write(0, &[1.0f32, 2.0, 3.0]).unwrap();
    let mut have: [f32; 3] = [0.0; 3];
    module.read(0, &mut have).unwrap();
    assert_eq!(have, [1.0, 2.0, 3.0]);

    // other element types share the same bytes
    module.write(16, &[0x3f800000u32]).unwrap();
    let mut one: [f32; 1] = [0.0];
    module.read(16, &mut one).unwrap();
    assert_eq!(one, [1.0]);

    // unaligned byte offsets
    module.write(1, &[-4.5f32, 8.25]).unwrap();
    let mut unaligned: [f32; 2] = [0.0; 2];
    module.read(1, &mut unaligned).unwrap();
    assert_eq!(unaligned, [-4.5, 8.25]);

    // last element of the memory
    module.write(byte_length - F32_BYTES, &[6.0f32]).unwrap();

    assert_eq!(
        module.write(byte_length - F32_BYTES, &[6.0f32, 7.0]),
        Err(ModuleError::Memory(MemoryError::OutOfBounds {
            ptr: byte_length - F32_BYTES,
            len: 2 * F32_BYTES,
            byte_length
        }))
    );
    let mut out: [f32; 2] = [0.0; 2];
    assert!(module.read(byte_length, &mut out).is_err());
}

pub fn test_module_grow<B: Backend>(mut module: Module<B>)
where
    Module<B>: ModuleInitialize + ModuleWrite + ModuleRead + Scopy,
{
    module.initialize().unwrap();
    let pages: usize = module.memory().pages();
    module.write(0, &[1.0f32, 2.0, 3.0, 4.0]).unwrap();

    assert_eq!(module.memory_mut().grow(1), Ok(pages));
    assert_eq!(module.memory().pages(), pages + 1);

    let y_ptr: usize = pages * PAGE_SIZE;
    assert_eq!(module.scopy(4, 0, 1, y_ptr, 1), Ok(y_ptr));

    let mut have: [f32; 4] = [0.0; 4];
    module.read(y_ptr, &mut have).unwrap();
    assert_eq!(have, [1.0, 2.0, 3.0, 4.0]);

    let memory = module.into_memory();
    assert_eq!(memory.pages(), pages + 1);
    assert_eq!(memory.view::<f32>(0, 1), Ok(&[1.0f32][..]));
}
