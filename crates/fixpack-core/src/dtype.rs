//! Element type hierarchy for versor algebra.
//!
//! The trait hierarchy is:
//! ```text
//! ElementEq
//!   └── Scalar
//!         └── Float  (f32, f64; sealed)
//! ```
//!
//! [`ElementEq`] is the equality a [`Versor`](crate::Versor) uses for its
//! elements: exact for integers, `bool` and `char`, ULP-tolerant for
//! floating point. [`Scalar`] adds the arithmetic needed for broadcasting
//! and dot products, and [`Float`] exposes the bit-level view the
//! comparator in [`ulp`](crate::ulp) works on.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::ulp;

// ---------------------------------------------------------------------------
// ElementEq — per-element equality used by Versor
// ---------------------------------------------------------------------------

/// Equality of two versor elements at the same index.
///
/// Floating-point types compare within [`Float::DEFAULT_ULP_TOLERANCE`]
/// units in the last place; every other primitive compares exactly.
/// Implement this for your own element types to store them in a
/// comparable [`Versor`](crate::Versor).
pub trait ElementEq {
    /// Whether `self` and `other` are considered the same element.
    fn element_eq(&self, other: &Self) -> bool;
}

// ---------------------------------------------------------------------------
// Scalar — numeric element types
// ---------------------------------------------------------------------------

/// Base trait for numeric element types.
///
/// This intentionally does *not* require floating-point operations so that
/// integer versors remain first-class citizens.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + Default
    + PartialEq
    + PartialOrd
    + ElementEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;
}

// ---------------------------------------------------------------------------
// Float — IEEE 754 binary32 / binary64
// ---------------------------------------------------------------------------

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Trait for floating-point scalar types (`f32`, `f64`).
///
/// Sealed: only the 32- and 64-bit IEEE representations have a defined
/// bit-level ordering for [`almost_equal`](crate::almost_equal).
pub trait Float: Scalar + Neg<Output = Self> + sealed::Sealed {
    /// Tolerance, in units in the last place, used by `==` on versors.
    const DEFAULT_ULP_TOLERANCE: u64 = 4;

    fn recip(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;

    /// The bit pattern as a signed integer, remapped so that integer
    /// order matches numeric order among same-sign finite values.
    ///
    /// Negative encodings are flipped about the sign bit (`MIN - bits`), so
    /// `-0.0` maps to `0` and increasingly negative values map to
    /// increasingly negative integers.
    fn ordered_bits(self) -> i64;
}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_float {
    ($ty:ty, $bits:ty) => {
        impl ElementEq for $ty {
            #[inline]
            fn element_eq(&self, other: &Self) -> bool {
                ulp::almost_equal(*self, *other)
            }
        }

        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
        }

        impl Float for $ty {
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            #[inline]
            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }
            #[inline]
            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }
            #[inline]
            fn ordered_bits(self) -> i64 {
                let bits = self.to_bits() as $bits;
                if bits < 0 {
                    i64::from(<$bits>::MIN.wrapping_sub(bits))
                } else {
                    i64::from(bits)
                }
            }
        }
    };
}

impl_scalar_float!(f32, i32);
impl_scalar_float!(f64, i64);

macro_rules! impl_scalar_int {
    ($($ty:ty),+) => {
        $(
            impl ElementEq for $ty {
                #[inline]
                fn element_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl Scalar for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }
                #[inline]
                fn one() -> Self {
                    1
                }
            }
        )+
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_exact_eq {
    ($($ty:ty),+) => {
        $(
            impl ElementEq for $ty {
                #[inline]
                fn element_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

impl_exact_eq!(bool, char);
