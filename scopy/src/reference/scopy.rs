//! Strided copy over `f32` slices and over `f32` elements stored in a byte buffer.
//!
//! Both conventions assign `y[offset_y + i * stride_y] = x[offset_x + i * stride_x]`
//! for `i` in `0..n`, in increasing `i`. Indices are not validated: an index
//! that falls outside its buffer panics.

use crate::{F32_BYTES, stride_to_offset};

/// Copies `n` elements of `x` into `y`, starting at the first (non-negative
/// stride) or last (negative stride) addressed element of each vector.
///
/// Returns `y` for chaining.
#[inline]
pub fn scopy<'a>(n: isize, x: &[f32], stride_x: isize, y: &'a mut [f32], stride_y: isize) -> &'a mut [f32] {
    scopy_ndarray(
        n,
        x,
        stride_x,
        stride_to_offset(n, stride_x),
        y,
        stride_y,
        stride_to_offset(n, stride_y),
    )
}

/// Copies `n` elements of `x` into `y` starting at explicit element offsets.
///
/// Returns `y` for chaining.
#[allow(clippy::too_many_arguments)]
pub fn scopy_ndarray<'a>(
    n: isize,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [f32],
    stride_y: isize,
    offset_y: usize,
) -> &'a mut [f32] {
    if n <= 0 {
        return y;
    }
    let mut ix: isize = offset_x as isize;
    let mut iy: isize = offset_y as isize;
    for _ in 0..n {
        y[iy as usize] = x[ix as usize];
        ix += stride_x;
        iy += stride_y;
    }
    y
}

/// Byte address of element `index` of the vector based at byte offset `ptr`.
#[inline(always)]
pub fn f32_address(ptr: usize, index: isize) -> usize {
    (ptr as isize + index * F32_BYTES as isize) as usize
}

/// Copies one `f32` element from byte address `src` to byte address `dst`.
#[inline(always)]
pub fn f32_move(mem: &mut [u8], src: usize, dst: usize) {
    mem.copy_within(src..src + F32_BYTES, dst);
}

/// [`scopy`] over vectors based at byte offsets `x_ptr` and `y_ptr` of `mem`.
///
/// Returns `y_ptr`.
#[inline]
pub fn scopy_bytes(n: isize, mem: &mut [u8], x_ptr: usize, stride_x: isize, y_ptr: usize, stride_y: isize) -> usize {
    scopy_ndarray_bytes(
        n,
        mem,
        x_ptr,
        stride_x,
        stride_to_offset(n, stride_x),
        y_ptr,
        stride_y,
        stride_to_offset(n, stride_y),
    )
}

/// [`scopy_ndarray`] over vectors based at byte offsets `x_ptr` and `y_ptr` of `mem`.
///
/// Elements are moved as raw 4-byte words, so the copy is bit-exact.
/// Returns `y_ptr`.
#[allow(clippy::too_many_arguments)]
pub fn scopy_ndarray_bytes(
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
    let mut ix: isize = offset_x as isize;
    let mut iy: isize = offset_y as isize;
    for _ in 0..n {
        f32_move(mem, f32_address(x_ptr, ix), f32_address(y_ptr, iy));
        ix += stride_x;
        iy += stride_y;
    }
    y_ptr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_unit_stride() {
        let x: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut y: [f32; 5] = [1.0; 5];
        scopy(5, &x, 1, &mut y, 1);
        assert_eq!(y, [1.0, 2.0, 3.0, 4.0, 5.0]);

        let mut z: [f32; 5] = [1.0; 5];
        scopy_ndarray(5, &x, 1, 0, &mut z, 1, 0);
        assert_eq!(y, z);
    }

    #[test]
    fn returns_destination() {
        let x: [f32; 3] = [1.0, 2.0, 3.0];
        let mut y: [f32; 3] = [0.0; 3];
        let y_ptr: *const f32 = y.as_ptr();
        let out: &mut [f32] = scopy(3, &x, 1, &mut y, 1);
        assert_eq!(out.as_ptr(), y_ptr);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn non_positive_n_is_noop() {
        let x: [f32; 3] = [1.0, 2.0, 3.0];
        for n in [0, -1, -100] {
            let mut y: [f32; 3] = [7.0; 3];
            scopy(n, &x, 0, &mut y, -3);
            scopy_ndarray(n, &x, 5, 1000, &mut y, 0, 1000);
            assert_eq!(y, [7.0; 3]);
        }
        // no access at all, even with empty buffers
        let mut empty: [f32; 0] = [];
        scopy_ndarray(0, &[], 1, 10, &mut empty, 1, 10);
    }

    #[test]
    fn leaves_tail_untouched() {
        let x: [f32; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y: [f32; 6] = [0.0; 6];
        scopy(3, &x, 1, &mut y, 1);
        assert_eq!(y, [1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn explicit_offsets() {
        let x: [f32; 5] = [9.0, 9.0, 5.0, 6.0, 7.0];
        let mut y: [f32; 3] = [0.0; 3];
        scopy_ndarray(3, &x, 1, 2, &mut y, 1, 0);
        assert_eq!(y, [5.0, 6.0, 7.0]);
    }

    #[test]
    fn mixed_strides() {
        let x: [f32; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y: [f32; 6] = [0.0; 6];
        scopy(3, &x, 2, &mut y, -2);
        // x[0], x[2], x[4] land on y[4], y[2], y[0]
        assert_eq!(y, [5.0, 0.0, 3.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn negative_strides_match_explicit_offsets() {
        let x: [f32; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        for (stride_x, stride_y) in [(-1, -1), (-2, 1), (1, -3), (-1, 2)] {
            let n: isize = 3;
            let mut simple: [f32; 8] = [0.0; 8];
            let mut full: [f32; 8] = [0.0; 8];
            scopy(n, &x, stride_x, &mut simple, stride_y);
            scopy_ndarray(
                n,
                &x,
                stride_x,
                ((n - 1) * stride_x.abs()) as usize * (stride_x < 0) as usize,
                &mut full,
                stride_y,
                ((n - 1) * stride_y.abs()) as usize * (stride_y < 0) as usize,
            );
            assert_eq!(
                simple.map(f32::to_bits),
                full.map(f32::to_bits),
                "stride_x={stride_x} stride_y={stride_y}"
            );
        }
    }

    #[test]
    fn reversed_copy() {
        let x: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
        let mut y: [f32; 4] = [0.0; 4];
        scopy(4, &x, -1, &mut y, 1);
        assert_eq!(y, [4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn zero_source_stride_broadcasts() {
        let x: [f32; 2] = [3.0, 9.0];
        let mut y: [f32; 4] = [0.0; 4];
        scopy_ndarray(4, &x, 0, 1, &mut y, 1, 0);
        assert_eq!(y, [9.0; 4]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let x: [f32; 2] = [1.0, 2.0];
        let mut y: [f32; 4] = [0.0; 4];
        scopy(3, &x, 1, &mut y, 1);
    }

    #[test]
    fn bytes_kernel_matches_slice_kernel() {
        let x: [f32; 5] = [1.0, -2.0, f32::NAN, f32::INFINITY, -0.0];
        let mut mem: Vec<u8> = vec![0u8; 64];
        mem[..20].copy_from_slice(bytemuck::cast_slice(&x));

        let y_ptr: usize = scopy_ndarray_bytes(5, &mut mem, 0, -1, 4, 32, 1, 0);
        assert_eq!(y_ptr, 32);

        let mut want: [f32; 5] = [0.0; 5];
        scopy_ndarray(5, &x, -1, 4, &mut want, 1, 0);

        let have: Vec<u32> = mem[32..52]
            .chunks_exact(4)
            .map(|b| u32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        assert_eq!(have, want.map(f32::to_bits).to_vec());
    }

    #[test]
    fn bytes_kernel_overlap_is_forward() {
        // y starts one element after x: increasing order smears x[0] forward.
        let mut mem: Vec<u8> = vec![0u8; 24];
        mem[..20].copy_from_slice(bytemuck::cast_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0]));
        scopy_bytes(4, &mut mem, 0, 1, 4, 1);
        let have: Vec<f32> = mem[..20]
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        assert_eq!(have, vec![1.0; 5]);
    }
}
