use scopy::{
    F32_BYTES,
    layouts::Module,
    oep::{ScopyImpl, ScopyNdarrayImpl},
    reference::scopy::{f32_address, f32_move, scopy_bytes, scopy_ndarray_bytes},
    stride_to_offset,
};

use crate::{CpuRef, CpuUnrolled};

unsafe impl ScopyImpl<Self> for CpuRef {
    fn scopy_impl(module: &mut Module<Self>, n: isize, x_ptr: usize, stride_x: isize, y_ptr: usize, stride_y: isize) -> usize {
        scopy_bytes(n, module.memory_mut().as_bytes_mut(), x_ptr, stride_x, y_ptr, stride_y)
    }
}

unsafe impl ScopyNdarrayImpl<Self> for CpuRef {
    fn scopy_ndarray_impl(
        module: &mut Module<Self>,
        n: isize,
        x_ptr: usize,
        stride_x: isize,
        offset_x: usize,
        y_ptr: usize,
        stride_y: isize,
        offset_y: usize,
    ) -> usize {
        scopy_ndarray_bytes(
            n,
            module.memory_mut().as_bytes_mut(),
            x_ptr,
            stride_x,
            offset_x,
            y_ptr,
            stride_y,
            offset_y,
        )
    }
}

unsafe impl ScopyImpl<Self> for CpuUnrolled {
    fn scopy_impl(module: &mut Module<Self>, n: isize, x_ptr: usize, stride_x: isize, y_ptr: usize, stride_y: isize) -> usize {
        scopy_ndarray_unrolled(
            n,
            module.memory_mut().as_bytes_mut(),
            x_ptr,
            stride_x,
            stride_to_offset(n, stride_x),
            y_ptr,
            stride_y,
            stride_to_offset(n, stride_y),
        )
    }
}

unsafe impl ScopyNdarrayImpl<Self> for CpuUnrolled {
    fn scopy_ndarray_impl(
        module: &mut Module<Self>,
        n: isize,
        x_ptr: usize,
        stride_x: isize,
        offset_x: usize,
        y_ptr: usize,
        stride_y: isize,
        offset_y: usize,
    ) -> usize {
        scopy_ndarray_unrolled(
            n,
            module.memory_mut().as_bytes_mut(),
            x_ptr,
            stride_x,
            offset_x,
            y_ptr,
            stride_y,
            offset_y,
        )
    }
}

const UNROLL: usize = 8;

/// Unit-stride specialization of [`scopy_ndarray_bytes`].
///
/// A single bulk move is used when the destination starts at or before the
/// source, or past its end: in both cases no element is overwritten before it
/// is read, so the result equals the increasing-index copy. A destination
/// starting strictly inside the source range replicates elements forward and
/// goes through the element loop.
#[allow(clippy::too_many_arguments)]
pub fn scopy_ndarray_unrolled(
    n: isize,
    mem: &mut [u8],
    x_ptr: usize,
    stride_x: isize,
    offset_x: usize,
    y_ptr: usize,
    stride_y: isize,
    offset_y: usize,
) -> usize {
    if n <= 0 {
        return y_ptr;
    }
    if stride_x != 1 || stride_y != 1 {
        return scopy_ndarray_bytes(n, mem, x_ptr, stride_x, offset_x, y_ptr, stride_y, offset_y);
    }

    let n: usize = n as usize;
    let len: usize = n * F32_BYTES;
    let mut ix: usize = f32_address(x_ptr, offset_x as isize);
    let mut iy: usize = f32_address(y_ptr, offset_y as isize);

    if iy <= ix || iy >= ix + len {
        mem.copy_within(ix..ix + len, iy);
        return y_ptr;
    }

    let m: usize = n % UNROLL;
    for _ in 0..m {
        f32_move(mem, ix, iy);
        ix += F32_BYTES;
        iy += F32_BYTES;
    }
    for _ in 0..n / UNROLL {
        f32_move(mem, ix, iy);
        f32_move(mem, ix + F32_BYTES, iy + F32_BYTES);
        f32_move(mem, ix + 2 * F32_BYTES, iy + 2 * F32_BYTES);
        f32_move(mem, ix + 3 * F32_BYTES, iy + 3 * F32_BYTES);
        f32_move(mem, ix + 4 * F32_BYTES, iy + 4 * F32_BYTES);
        f32_move(mem, ix + 5 * F32_BYTES, iy + 5 * F32_BYTES);
        f32_move(mem, ix + 6 * F32_BYTES, iy + 6 * F32_BYTES);
        f32_move(mem, ix + 7 * F32_BYTES, iy + 7 * F32_BYTES);
        ix += UNROLL * F32_BYTES;
        iy += UNROLL * F32_BYTES;
    }
    y_ptr
}
