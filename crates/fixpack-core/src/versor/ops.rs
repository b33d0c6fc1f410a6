//! Element-wise operators for [`Versor`].
//!
//! Implements, for operands of any length `M` (truncating to the shorter
//! one, see [`Versor::apply_with`]):
//! - `Add`, `Sub`, `Mul`, `Div` and their `*Assign` forms
//! - `BitXor`, `BitOr`, `BitAnd` and their `*Assign` forms
//!
//! plus `Neg` and `Not`, and scalar broadcasting:
//! - `Versor<T> * T`, `T * Versor<T>`, `*=`
//! - `Versor<T> / T` and `/=` for [`Float`] elements, as multiplication by
//!   the reciprocal

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

use crate::{Float, Scalar};

use super::Versor;

// ======================================================================
// Versor op Versor  (element-wise, truncated to the shorter operand)
// ======================================================================

macro_rules! impl_versor_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, const N: usize, const M: usize> $assign_trait<&Versor<T, M>> for Versor<T, N>
        where
            T: Copy + $trait<Output = T>,
        {
            fn $assign_method(&mut self, rhs: &Versor<T, M>) {
                self.apply_with(|a, b| a $op b, rhs);
            }
        }

        impl<T, const N: usize, const M: usize> $assign_trait<Versor<T, M>> for Versor<T, N>
        where
            T: Copy + $trait<Output = T>,
        {
            fn $assign_method(&mut self, rhs: Versor<T, M>) {
                self.apply_with(|a, b| a $op b, &rhs);
            }
        }

        impl<T, const N: usize, const M: usize> $trait<Versor<T, M>> for Versor<T, N>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Versor<T, N>;

            fn $method(mut self, rhs: Versor<T, M>) -> Versor<T, N> {
                self.apply_with(|a, b| a $op b, &rhs);
                self
            }
        }

        impl<T, const N: usize, const M: usize> $trait<&Versor<T, M>> for &Versor<T, N>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Versor<T, N>;

            fn $method(self, rhs: &Versor<T, M>) -> Versor<T, N> {
                let mut out = *self;
                out.apply_with(|a, b| a $op b, rhs);
                out
            }
        }
    };
}

impl_versor_binop!(Add, add, AddAssign, add_assign, +);
impl_versor_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_versor_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_versor_binop!(Div, div, DivAssign, div_assign, /);
impl_versor_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
impl_versor_binop!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_versor_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, &);

// ======================================================================
// Unary operators
// ======================================================================

impl<T: Copy + Neg<Output = T>, const N: usize> Versor<T, N> {
    /// Negate every element in place.
    pub fn negate(&mut self) -> &mut Self {
        self.apply(|x| -x)
    }
}

impl<T: Copy + Not<Output = T>, const N: usize> Versor<T, N> {
    /// Bitwise-complement every element in place.
    pub fn complement(&mut self) -> &mut Self {
        self.apply(|x| !x)
    }
}

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for Versor<T, N> {
    type Output = Versor<T, N>;

    fn neg(mut self) -> Versor<T, N> {
        self.negate();
        self
    }
}

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for &Versor<T, N> {
    type Output = Versor<T, N>;

    fn neg(self) -> Versor<T, N> {
        -*self
    }
}

impl<T: Copy + Not<Output = T>, const N: usize> Not for Versor<T, N> {
    type Output = Versor<T, N>;

    fn not(mut self) -> Versor<T, N> {
        self.complement();
        self
    }
}

impl<T: Copy + Not<Output = T>, const N: usize> Not for &Versor<T, N> {
    type Output = Versor<T, N>;

    fn not(self) -> Versor<T, N> {
        !*self
    }
}

// ======================================================================
// Versor * scalar  (broadcast scalar to every element)
// ======================================================================

impl<T: Scalar, const N: usize> MulAssign<T> for Versor<T, N> {
    fn mul_assign(&mut self, s: T) {
        self.apply(|x| x * s);
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Versor<T, N> {
    type Output = Versor<T, N>;

    fn mul(mut self, s: T) -> Versor<T, N> {
        self *= s;
        self
    }
}

impl<T: Scalar, const N: usize> Mul<T> for &Versor<T, N> {
    type Output = Versor<T, N>;

    fn mul(self, s: T) -> Versor<T, N> {
        *self * s
    }
}

/// Scalar division multiplies by the reciprocal, so rounding and the
/// zero/infinity cases follow `x * (1 / s)` rather than `x / s`.
impl<T: Float, const N: usize> DivAssign<T> for Versor<T, N> {
    fn div_assign(&mut self, s: T) {
        *self *= s.recip();
    }
}

impl<T: Float, const N: usize> Div<T> for Versor<T, N> {
    type Output = Versor<T, N>;

    fn div(mut self, s: T) -> Versor<T, N> {
        self /= s;
        self
    }
}

impl<T: Float, const N: usize> Div<T> for &Versor<T, N> {
    type Output = Versor<T, N>;

    fn div(self, s: T) -> Versor<T, N> {
        *self / s
    }
}

// ======================================================================
// scalar * Versor  (commutes with Versor * scalar)
// ======================================================================

macro_rules! impl_scalar_lhs_mul {
    ($($ty:ty),+) => {
        $(
            impl<const N: usize> Mul<Versor<$ty, N>> for $ty {
                type Output = Versor<$ty, N>;

                fn mul(self, v: Versor<$ty, N>) -> Versor<$ty, N> {
                    v * self
                }
            }

            impl<const N: usize> Mul<&Versor<$ty, N>> for $ty {
                type Output = Versor<$ty, N>;

                fn mul(self, v: &Versor<$ty, N>) -> Versor<$ty, N> {
                    *v * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
