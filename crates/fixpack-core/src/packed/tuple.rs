//! Conversions between flat tuples like `(P, Q, R)` and their packed
//! inductive form `Cons<P, Cons<Q, Cons<R, ()>>>`.
//!
//! Tuples of 1 to 12 `Copy` elements are supported.

use super::list::{Cons, Field, List};

/// A flat tuple with a packed inductive counterpart.
pub trait Tuple: Copy {
    /// The corresponding packed cons chain.
    type Packed: List;

    fn pack(self) -> Self::Packed;
    fn unpack(packed: Self::Packed) -> Self;
}

/// A leading subset of the elements of tuple `L`.
///
/// `(a, b)` is a prefix of `(A, B, C)`; the missing trailing element is
/// filled with `C::default()`. A tuple longer than `L` is never a prefix.
pub trait Prefix<L> {
    fn fill(self) -> L;
}

macro_rules! cons_ty {
    () => { () };
    ($head:ident $(, $rest:ident)*) => { Cons<$head, cons_ty!($($rest),*)> };
}

macro_rules! cons_val {
    ($t:ident;) => { () };
    ($t:ident; $i:tt $($rest:tt)*) => { Cons::new($t.$i, cons_val!($t; $($rest)*)) };
}

macro_rules! impl_tuple {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Copy),+> Tuple for ($($name,)+) {
            type Packed = cons_ty!($($name),+);

            #[inline]
            fn pack(self) -> Self::Packed {
                let t = self;
                cons_val!(t; $($idx)+)
            }

            #[inline]
            fn unpack(packed: Self::Packed) -> Self {
                ($(<Self::Packed as Field<$idx>>::read(&packed),)+)
            }
        }

        impl_prefixes!(@walk [$($name)+] [] [$($name)+] [$($idx)+]);
    };
}

macro_rules! impl_prefixes {
    (@emit [$($all:ident)+] [$($pre:ident $pi:tt)*] [$($rest:ident)*]) => {
        impl<$($pre: Copy,)* $($rest: Copy + Default,)*> Prefix<($($all,)+)> for ($($pre,)*) {
            #[inline]
            fn fill(self) -> ($($all,)+) {
                ($(self.$pi,)* $(<$rest as Default>::default(),)*)
            }
        }
    };
    (@walk [$($all:ident)+] [$($pre:ident $pi:tt)*] [] [$($idx:tt)*]) => {
        impl_prefixes!(@emit [$($all)+] [$($pre $pi)*] []);
    };
    (@walk
        [$($all:ident)+] [$($pre:ident $pi:tt)*] [$next:ident $($rest:ident)*] [$i:tt $($idx:tt)*]
    ) => {
        impl_prefixes!(@emit [$($all)+] [$($pre $pi)*] [$next $($rest)*]);
        impl_prefixes!(@walk [$($all)+] [$($pre $pi)* $next $i] [$($rest)*] [$($idx)*]);
    };
}

impl_tuple!(A 0);
impl_tuple!(A 0, B 1);
impl_tuple!(A 0, B 1, C 2);
impl_tuple!(A 0, B 1, C 2, D 3);
impl_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
