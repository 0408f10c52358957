//! Pure-Rust reference kernels.
//!
//! Used directly by the flat-array entry points and as correctness oracle for
//! backend testing via the [`crate::test_suite`] module.

pub mod scopy;
