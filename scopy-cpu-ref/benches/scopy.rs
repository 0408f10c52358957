use criterion::{Criterion, criterion_group, criterion_main};
use scopy::bench_suite::scopy::{bench_scopy, bench_scopy_ndarray};
use scopy_cpu_ref::{CpuRef, CpuUnrolled};

fn bench_scopy_cpu_ref(c: &mut Criterion) {
    bench_scopy::<CpuRef>(c, "cpu_ref");
}

fn bench_scopy_cpu_unrolled(c: &mut Criterion) {
    bench_scopy::<CpuUnrolled>(c, "cpu_unrolled");
}

fn bench_scopy_ndarray_cpu_ref(c: &mut Criterion) {
    bench_scopy_ndarray::<CpuRef>(c, "cpu_ref");
}

fn bench_scopy_ndarray_cpu_unrolled(c: &mut Criterion) {
    bench_scopy_ndarray::<CpuUnrolled>(c, "cpu_unrolled");
}

criterion_group!(
    benches,
    bench_scopy_cpu_ref,
    bench_scopy_cpu_unrolled,
    bench_scopy_ndarray_cpu_ref,
    bench_scopy_ndarray_cpu_unrolled,
);
criterion_main!(benches);
