use itertools::iproduct;
use rand_distr::Normal;
use sampling::Source;

use crate::{
    F32_BYTES, ModuleError,
    api::{ModuleInitialize, ModuleRead, ModuleWrite, Scopy, ScopyNdarray},
    layouts::{Backend, Module},
    reference::scopy::{scopy_bytes, scopy_ndarray, scopy_ndarray_bytes},
    stride_to_offset,
};

/// Smallest slice length addressed by `n` elements from `offset` with step `stride`.
fn span(n: isize, stride: isize, offset: usize) -> usize {
    if stride > 0 {
        offset + ((n - 1) * stride) as usize + 1
    } else {
        offset + 1
    }
}

fn read_f32<B: Backend>(module: &Module<B>, ptr: usize, len: usize) -> Vec<f32>
where
    Module<B>: ModuleRead,
{
    let mut out: Vec<f32> = vec![0f32; len];
    module.read(ptr, &mut out).unwrap();
    out
}

pub fn test_scopy<B: Backend>(mut module: Module<B>)
where
    Module<B>: ModuleInitialize + ModuleWrite + ModuleRead + Scopy,
{
    module.initialize().unwrap();

    let n: usize = 5;
    let x_ptr: usize = 0;
    let y_ptr: usize = n * F32_BYTES;

    module.write(x_ptr, &[1.0f32, 2.0, 3.0, 4.0, 5.0]).unwrap();
    module.write(y_ptr, &[1.0f32; 5]).unwrap();

    let ptr: usize = module.scopy(n as isize, x_ptr, 1, y_ptr, 1).unwrap();
    assert_eq!(ptr, y_ptr);
    assert_eq!(read_f32(&module, y_ptr, n), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(read_f32(&module, x_ptr, n), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

pub fn test_scopy_ndarray<B: Backend>(mut module: Module<B>)
where
    Module<B>: ModuleInitialize + ModuleWrite + ModuleRead + ScopyNdarray,
{
    module.initialize().unwrap();

    let n: usize = 5;
    let x_ptr: usize = 0;
    let y_ptr: usize = n * F32_BYTES;

    module.write(x_ptr, &[1.0f32, 2.0, 3.0, 4.0, 5.0]).unwrap();
    module.write(y_ptr, &[1.0f32; 5]).unwrap();

    let ptr: usize = module.scopy_ndarray(n as isize, x_ptr, 1, 0, y_ptr, 1, 0).unwrap();
    assert_eq!(ptr, y_ptr);
    assert_eq!(read_f32(&module, y_ptr, n), vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    // sub-vector view through explicit offsets
    let x_ptr: usize = 64;
    let y_ptr: usize = 128;
    module.write(x_ptr, &[9.0f32, 9.0, 5.0, 6.0, 7.0]).unwrap();
    module.write(y_ptr, &[0.0f32; 3]).unwrap();
    assert_eq!(module.scopy_ndarray(3, x_ptr, 1, 2, y_ptr, 1, 0), Ok(y_ptr));
    assert_eq!(read_f32(&module, y_ptr, 3), vec![5.0, 6.0, 7.0]);
}

pub fn test_scopy_uninitialized<B: Backend>(mut module: Module<B>)
where
    Module<B>: ModuleInitialize + ModuleWrite + ModuleRead + Scopy + ScopyNdarray,
{
    assert!(!module.is_initialized());

    module.write(0, &[1.0f32, 2.0, 3.0]).unwrap();
    module.write(12, &[0.0f32; 3]).unwrap();

    assert_eq!(module.scopy(3, 0, 1, 12, 1), Err(ModuleError::Uninitialized));
    assert_eq!(
        module.scopy_ndarray(3, 0, 1, 0, 12, 1, 0),
        Err(ModuleError::Uninitialized)
    );
    assert_eq!(read_f32(&module, 12, 3), vec![0.0; 3]);

    let mut outcome: Option<crate::Result<()>> = None;
    module.initialize_with(|res| outcome = Some(res));
    assert_eq!(outcome, Some(Ok(())));
    assert!(module.is_initialized());

    assert_eq!(module.scopy(3, 0, 1, 12, 1), Ok(12));
    assert_eq!(read_f32(&module, 12, 3), vec![1.0, 2.0, 3.0]);

    // a second initialization replaces the handle and keeps the memory
    module.initialize().unwrap();
    assert_eq!(read_f32(&module, 12, 3), vec![1.0, 2.0, 3.0]);
}

pub fn test_scopy_non_positive_n<B: Backend>(mut module: Module<B>)
where
    Module<B>: ModuleInitialize + ModuleWrite + Scopy + ScopyNdarray,
{
    module.initialize().unwrap();

    let mut source: Source = Source::new([0u8; 32]);
    let mut garbage: Vec<f32> = vec![0f32; 256];
    source.fill_bits_f32(&mut garbage);
    module.write(0, &garbage).unwrap();
    let before: Vec<u8> = module.memory().as_bytes().to_vec();

    // pointers and offsets far outside the memory are never dereferenced
    let far: usize = module.memory().byte_length() * 4;
    for n in [0, -1, -64] {
        for (stride_x, stride_y) in [(1, 1), (0, 0), (-5, 3)] {
            assert_eq!(module.scopy(n, far, stride_x, 16, stride_y), Ok(16));
            assert_eq!(module.scopy_ndarray(n, 0, stride_x, far, far, stride_y, far), Ok(far));
        }
    }
    assert!(module.memory().as_bytes() == before.as_slice());
}

/// Compares module results on disjoint vectors with the slice kernel, for
/// every combination of strides in `[-3, 3]` and random lengths and offsets.
pub fn test_scopy_strided<B: Backend>(mut module: Module<B>)
where
    Module<B>: ModuleInitialize + ModuleWrite + ModuleRead + Scopy + ScopyNdarray,
{
    module.initialize().unwrap();

    let mut source: Source = Source::new([1u8; 32]);
    let dist: Normal<f64> = Normal::new(0.0, 16.0).unwrap();
    let strides: [isize; 7] = [-3, -2, -1, 0, 1, 2, 3];

    for (stride_x, stride_y) in iproduct!(strides, strides) {
        for n in [1, 2, 7, 8, 9, 16, 17] {
            let neg_x: usize = stride_to_offset(n, stride_x);
            let neg_y: usize = stride_to_offset(n, stride_y);
            let offset_x: usize = neg_x + source.next_isize(0, 3) as usize;
            let offset_y: usize = neg_y + source.next_isize(0, 3) as usize;

            let len_x: usize = span(n, stride_x, offset_x) + 2;
            let len_y: usize = span(n, stride_y, offset_y) + 2;

            let mut x: Vec<f32> = vec![0f32; len_x];
            let mut y: Vec<f32> = vec![0f32; len_y];
            source.fill_dist_f32(&mut x, dist);
            source.fill_f32(&mut y, -1.0, 1.0);

            // unaligned byte offsets are part of the contract
            let x_ptr: usize = 3;
            let y_ptr: usize = x_ptr + len_x * F32_BYTES + source.next_isize(0, 5) as usize;

            // full form
            let mut want: Vec<f32> = y.clone();
            scopy_ndarray(n, &x, stride_x, offset_x, &mut want, stride_y, offset_y);

            module.write(x_ptr, &x).unwrap();
            module.write(y_ptr, &y).unwrap();
            assert_eq!(
                module.scopy_ndarray(n, x_ptr, stride_x, offset_x, y_ptr, stride_y, offset_y),
                Ok(y_ptr)
            );
            assert_eq!(
                read_f32(&module, y_ptr, len_y),
                want,
                "ndarray n={n} stride_x={stride_x} offset_x={offset_x} stride_y={stride_y} offset_y={offset_y}"
            );
            assert_eq!(read_f32(&module, x_ptr, len_x), x);

            // simple form addresses from the derived offsets
            let mut want: Vec<f32> = y.clone();
            scopy_ndarray(n, &x, stride_x, neg_x, &mut want, stride_y, neg_y);

            module.write(y_ptr, &y).unwrap();
            assert_eq!(module.scopy(n, x_ptr, stride_x, y_ptr, stride_y), Ok(y_ptr));
            assert_eq!(
                read_f32(&module, y_ptr, len_y),
                want,
                "main n={n} stride_x={stride_x} stride_y={stride_y}"
            );
        }
    }
}

/// Source and destination share memory: the result must match the
/// increasing-index reference, bit for bit.
pub fn test_scopy_overlap<B: Backend>(mut module: Module<B>)
where
    Module<B>: ModuleInitialize + ModuleWrite + Scopy + ScopyNdarray,
{
    module.initialize().unwrap();

    let mut source: Source = Source::new([2u8; 32]);
    let mut data: Vec<f32> = vec![0f32; 128];
    let base: usize = 256;

    for (n, stride, shift) in iproduct!([1, 5, 8, 16, 33], [-2, -1, 1, 2], -10..=10isize) {
        source.fill_bits_f32(&mut data);
        module.write(0, &data).unwrap();

        let x_ptr: usize = base;
        let y_ptr: usize = (base as isize + shift * F32_BYTES as isize) as usize;

        let mut want: Vec<u8> = module.memory().as_bytes().to_vec();
        scopy_bytes(n, &mut want, x_ptr, stride, y_ptr, stride);
        assert_eq!(module.scopy(n, x_ptr, stride, y_ptr, stride), Ok(y_ptr));
        assert!(
            module.memory().as_bytes() == want.as_slice(),
            "main n={n} stride={stride} shift={shift}"
        );

        let mut want: Vec<u8> = module.memory().as_bytes().to_vec();
        scopy_ndarray_bytes(n, &mut want, x_ptr, stride, 70, y_ptr, stride, 70);
        assert_eq!(module.scopy_ndarray(n, x_ptr, stride, 70, y_ptr, stride, 70), Ok(y_ptr));
        assert!(
            module.memory().as_bytes() == want.as_slice(),
            "ndarray n={n} stride={stride} shift={shift}"
        );
    }
}

/// Runs the same random sequence of copies on both modules and compares
/// their memories after every call.
pub fn test_scopy_cross<BR: Backend, BT: Backend>(mut module_ref: Module<BR>, mut module_test: Module<BT>)
where
    Module<BR>: ModuleInitialize + ModuleWrite + Scopy + ScopyNdarray,
    Module<BT>: ModuleInitialize + ModuleWrite + Scopy + ScopyNdarray,
{
    module_ref.initialize().unwrap();
    module_test.initialize().unwrap();

    let mut source: Source = Source::new([3u8; 32]);
    let mut data: Vec<f32> = vec![0f32; 1024];
    source.fill_bits_f32(&mut data);
    module_ref.write(0, &data).unwrap();
    module_test.write(0, &data).unwrap();

    // every drawn parameter set stays inside the 4 KiB written above
    for _ in 0..2000 {
        let n: isize = source.next_isize(-2, 40);
        let stride_x: isize = source.next_isize(-4, 4);
        let stride_y: isize = source.next_isize(-4, 4);
        let offset_x: usize = source.next_isize(160, 200) as usize;
        let offset_y: usize = source.next_isize(160, 200) as usize;
        let x_ptr: usize = source.next_isize(0, 1024) as usize;
        let y_ptr: usize = source.next_isize(0, 1024) as usize;

        if source.next_bool() {
            assert_eq!(
                module_ref.scopy(n, x_ptr, stride_x, y_ptr, stride_y),
                module_test.scopy(n, x_ptr, stride_x, y_ptr, stride_y)
            );
        } else {
            assert_eq!(
                module_ref.scopy_ndarray(n, x_ptr, stride_x, offset_x, y_ptr, stride_y, offset_y),
                module_test.scopy_ndarray(n, x_ptr, stride_x, offset_x, y_ptr, stride_y, offset_y)
            );
        }
        assert!(
            module_ref.memory().as_bytes() == module_test.memory().as_bytes(),
            "n={n} x_ptr={x_ptr} stride_x={stride_x} offset_x={offset_x} y_ptr={y_ptr} stride_y={stride_y} offset_y={offset_y}"
        );
    }
}
