//! # scopy
//!
//! Strided single-precision vector copy (BLAS Level-1 `scopy`), exposed over
//! caller-owned slices and over byte offsets into a module-owned linear memory.
//!
//! ## Kernel
//!
//! For `i` in `0..N`, `y[offset_y + i * stride_y] = x[offset_x + i * stride_x]`,
//! evaluated in increasing `i`. Strides are signed element counts, offsets are
//! element indices. `N <= 0` touches neither sequence. There is no aliasing
//! protection: when source and destination overlap, the increasing-`i` order is
//! the defined result.
//!
//! - [`scopy()`] -- simple form, offsets derived from the strides.
//! - [`scopy_ndarray`] -- full form, explicit starting offsets.
//!
//! ## Module
//!
//! A [`layouts::Module`] owns a [`layouts::LinearMemory`] and runs the same two
//! entry points over byte offsets into it. The crate is organized into a
//! four-layer stack:
//!
//! 1. **[`api`]** -- safe, user-facing traits ([`api::Scopy`], [`api::ScopyNdarray`],
//!    [`api::ModuleWrite`], [`api::ModuleRead`], ...).
//! 2. **[`oep`]** -- unsafe extension-point traits implemented by backend crates.
//! 3. **[`delegates`]** -- blanket impls wiring [`api`] to [`oep`] on [`layouts::Module`].
//! 4. **[`mod@reference`]** -- pure-Rust kernels, used as correctness oracle.
//!
//! ## Testing and Benchmarking
//!
//! [`test_suite`] holds backend-parametric tests, instantiated by backend crates
//! through [`backend_test_suite!`] and [`cross_backend_test_suite!`].
//! [`bench_suite`] holds the matching Criterion harnesses.

#![deny(rustdoc::broken_intra_doc_links)]

/// Safe, user-facing trait definitions.
pub mod api;

/// Criterion-based benchmark harnesses, generic over any backend.
pub mod bench_suite;

/// Blanket implementations connecting [`api`] traits to [`oep`] traits on
/// [`layouts::Module`].
pub mod delegates;

mod error;

/// Linear memory and module layouts.
pub mod layouts;

/// Open Extension Points: `unsafe` traits that backend crates implement.
///
/// Each trait mirrors a corresponding [`api`] trait and carries the `Impl`
/// suffix. See [`doc::backend_safety`] for the safety contract.
pub mod oep;

/// Pure-Rust reference kernels.
pub mod reference;

/// Fully generic, backend-parametric test functions.
pub mod test_suite;

/// Embedded safety contract documentation for backend implementors.
pub mod doc {
    /// Safety contract that all [`crate::oep`] trait implementations must uphold.
    #[doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/docs/backend_safety_contract.md"))]
    pub mod backend_safety {
        pub const _PLACEHOLDER: () = ();
    }
}

pub use error::*;
pub use reference::scopy::{scopy, scopy_ndarray};

/// Size in bytes of one single-precision element in linear memory.
pub const F32_BYTES: usize = size_of::<f32>();

/// Returns the starting index of a traversal of `n` elements with step
/// `stride`: `0` for a non-negative stride, the last addressed element
/// otherwise.
#[inline(always)]
pub fn stride_to_offset(n: isize, stride: isize) -> usize {
    if stride < 0 { ((1 - n) * stride) as usize } else { 0 }
}
