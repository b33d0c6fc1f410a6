//! Bit-level near-equality for floating-point values.
//!
//! Two finite values of the same sign are "almost equal" when at most
//! `tolerance` representable values lie between them, i.e. when their
//! [ordered bit patterns](Float::ordered_bits) differ by at most
//! `tolerance`.
//!
//! Special values:
//!
//! | Operands | Result |
//! |---|---|
//! | either infinite | `x == y` (same signed infinity only) |
//! | either NaN | `false`, including `NaN` against itself |
//! | different sign bits | `x == y`, so `+0.0` equals `-0.0` |
//!
//! ```
//! use fixpack_core::almost_equal;
//!
//! let mut next = 1.0_f32;
//! for _ in 0..4 {
//!     next = f32::from_bits(next.to_bits() + 1);
//! }
//! assert!(almost_equal(1.0_f32, next));
//! assert!(!almost_equal(1.0_f32, f32::from_bits(next.to_bits() + 1)));
//! ```
//!
//! Only `f32` and `f64` are accepted:
//!
//! ```compile_fail
//! use fixpack_core::almost_equal;
//! almost_equal(1_u32, 1_u32);
//! ```

use crate::Float;

/// Compare `x` and `y` within [`Float::DEFAULT_ULP_TOLERANCE`] ULPs.
#[inline]
pub fn almost_equal<F: Float>(x: F, y: F) -> bool {
    almost_equal_ulps(x, y, F::DEFAULT_ULP_TOLERANCE)
}

/// Compare `x` and `y` within `tolerance` units in the last place.
pub fn almost_equal_ulps<F: Float>(x: F, y: F, tolerance: u64) -> bool {
    if x.is_infinite() || y.is_infinite() {
        return x == y;
    }
    if x.is_nan() || y.is_nan() {
        return false;
    }
    if x.is_sign_negative() != y.is_sign_negative() {
        return x == y;
    }
    x.ordered_bits().abs_diff(y.ordered_bits()) <= tolerance
}
