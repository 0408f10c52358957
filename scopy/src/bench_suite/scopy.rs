use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sampling::Source;

use crate::{
    F32_BYTES,
    api::{ModuleInitialize, ModuleNew, ModuleWrite, Scopy, ScopyNdarray},
    layouts::{Backend, LinearMemory, MemoryDescriptor, Module, PAGE_SIZE},
    oep::{ModuleInitializeImpl, ScopyImpl, ScopyNdarrayImpl},
};

fn setup<B: Backend>(n: usize, stride_x: isize, stride_y: isize) -> (Module<B>, usize, usize)
where
    Module<B>: ModuleNew<B> + ModuleInitialize + ModuleWrite,
{
    let len_x: usize = n * stride_x.unsigned_abs().max(1);
    let len_y: usize = n * stride_y.unsigned_abs().max(1);
    let bytes: usize = (len_x + len_y) * F32_BYTES;

    let memory: LinearMemory =
        LinearMemory::new(MemoryDescriptor::new(bytes.div_ceil(PAGE_SIZE), None)).expect("invalid memory descriptor");
    let mut module: Module<B> = Module::<B>::new(memory);
    module.initialize().expect("module initialization failed");

    let mut source: Source = Source::new([0u8; 32]);
    let mut x: Vec<f32> = vec![0f32; len_x];
    source.fill_f32(&mut x, -1.0, 1.0);
    module.write(0, &x).expect("write out of bounds");

    (module, 0, len_x * F32_BYTES)
}

pub fn bench_scopy<B: Backend>(c: &mut Criterion, label: &str)
where
    B: ModuleInitializeImpl<B> + ScopyImpl<B>,
{
    let group_name: String = format!("scopy::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<B: Backend>(params: (usize, isize, isize)) -> impl FnMut()
    where
        Module<B>: ModuleNew<B> + ModuleInitialize + ModuleWrite + Scopy,
    {
        let (n, stride_x, stride_y) = params;
        let (mut module, x_ptr, y_ptr) = setup::<B>(n, stride_x, stride_y);
        move || {
            black_box(module.scopy(n as isize, x_ptr, stride_x, y_ptr, stride_y).ok());
        }
    }

    for params in [(1 << 10, 1, 1), (1 << 14, 1, 1), (1 << 18, 1, 1), (1 << 14, 2, -1), (1 << 14, -3, 4)] {
        let id = BenchmarkId::from_parameter(format!("{}x({},{})", params.0, params.1, params.2));
        let mut runner = runner::<B>(params);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

pub fn bench_scopy_ndarray<B: Backend>(c: &mut Criterion, label: &str)
where
    B: ModuleInitializeImpl<B> + ScopyNdarrayImpl<B>,
{
    let group_name: String = format!("scopy_ndarray::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<B: Backend>(params: (usize, isize, isize)) -> impl FnMut()
    where
        Module<B>: ModuleNew<B> + ModuleInitialize + ModuleWrite + ScopyNdarray,
    {
        let (n, stride_x, stride_y) = params;
        let (mut module, x_ptr, y_ptr) = setup::<B>(n, stride_x, stride_y);
        let offset_x: usize = if stride_x < 0 { (n - 1) * stride_x.unsigned_abs() } else { 0 };
        let offset_y: usize = if stride_y < 0 { (n - 1) * stride_y.unsigned_abs() } else { 0 };
        move || {
            black_box(
                module
                    .scopy_ndarray(n as isize, x_ptr, stride_x, offset_x, y_ptr, stride_y, offset_y)
                    .ok(),
            );
        }
    }

    for params in [(1 << 10, 1, 1), (1 << 14, 1, 1), (1 << 18, 1, 1), (1 << 14, -1, -1)] {
        let id = BenchmarkId::from_parameter(format!("{}x({},{})", params.0, params.1, params.2));
        let mut runner = runner::<B>(params);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}
