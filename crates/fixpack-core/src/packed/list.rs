//! Inductive packed storage behind [`PackedTuple`](super::PackedTuple).
//!
//! A tuple of k > 1 types is a [`Cons`] of its head element and the packed
//! tuple of the remaining k - 1 types; a tuple of one type is a `Cons`
//! whose tail is `()`:
//!
//! ```text
//! (f64, u8, i32)  =>  Cons<f64, Cons<u8, Cons<i32, ()>>>
//! ```
//!
//! Every `Cons` is `#[repr(C, packed)]`, so nesting never inserts padding
//! and the footprint is the exact sum of the element footprints. Packed
//! fields cannot be borrowed; all access copies in and out.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Range;

/// One packed cell: a head element followed by the packed tail.
#[repr(C, packed)]
pub struct Cons<H, T> {
    head: H,
    tail: T,
}

impl<H, T> Cons<H, T> {
    #[inline]
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

impl<H: Copy, T: Copy> Cons<H, T> {
    #[inline]
    pub fn head(&self) -> H {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> T {
        self.tail
    }
}

impl<H: Copy, T: Copy> Clone for Cons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: Copy, T: Copy> Copy for Cons<H, T> {}

// ======================================================================
// List — arity and layout of a cons chain
// ======================================================================

/// A `()`-terminated chain of [`Cons`] cells.
pub trait List: Copy {
    /// Number of elements in the chain.
    const LEN: usize;

    /// Byte range of element `i` inside the packed layout.
    fn field_span(i: usize) -> Option<Range<usize>>;
}

impl List for () {
    const LEN: usize = 0;

    fn field_span(_: usize) -> Option<Range<usize>> {
        None
    }
}

impl<H: Copy, T: List> List for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn field_span(i: usize) -> Option<Range<usize>> {
        let width = size_of::<H>();
        if i == 0 {
            Some(0..width)
        } else {
            T::field_span(i - 1).map(|r| r.start + width..r.end + width)
        }
    }
}

// ======================================================================
// Field — compile-time indexed access
// ======================================================================

/// Element `I` of a cons chain.
///
/// Only implemented for `I` below the chain length, so asking for a
/// missing position fails to type-check.
pub trait Field<const I: usize>: List {
    type Type: Copy;

    fn read(&self) -> Self::Type;
    fn write(&mut self, value: Self::Type);
}

impl<H: Copy, T: List> Field<0> for Cons<H, T> {
    type Type = H;

    #[inline]
    fn read(&self) -> H {
        self.head
    }

    #[inline]
    fn write(&mut self, value: H) {
        self.head = value;
    }
}

macro_rules! impl_field {
    ($($i:tt => $prev:tt),+ $(,)?) => {
        $(
            impl<H: Copy, T: Field<$prev>> Field<$i> for Cons<H, T> {
                type Type = <T as Field<$prev>>::Type;

                #[inline]
                fn read(&self) -> Self::Type {
                    let tail = self.tail;
                    <T as Field<$prev>>::read(&tail)
                }

                #[inline]
                fn write(&mut self, value: Self::Type) {
                    let mut tail = self.tail;
                    <T as Field<$prev>>::write(&mut tail, value);
                    self.tail = tail;
                }
            }
        )+
    };
}

impl_field!(
    1 => 0,
    2 => 1,
    3 => 2,
    4 => 3,
    5 => 4,
    6 => 5,
    7 => 6,
    8 => 7,
    9 => 8,
    10 => 9,
    11 => 10,
);

// ======================================================================
// Element-wise traits, resolved head first
// ======================================================================

impl<H: Copy + Default, T: Copy + Default> Default for Cons<H, T> {
    fn default() -> Self {
        Self::new(H::default(), T::default())
    }
}

impl<H: Copy + PartialEq, T: Copy + PartialEq> PartialEq for Cons<H, T> {
    fn eq(&self, other: &Self) -> bool {
        self.head() == other.head() && self.tail() == other.tail()
    }
}

impl<H: Copy + Eq, T: Copy + Eq> Eq for Cons<H, T> {}

impl<H: Copy + PartialOrd, T: Copy + PartialOrd> PartialOrd for Cons<H, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.head().partial_cmp(&other.head()) {
            Some(Ordering::Equal) => self.tail().partial_cmp(&other.tail()),
            ord => ord,
        }
    }
}

impl<H: Copy + Ord, T: Copy + Ord> Ord for Cons<H, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.head()
            .cmp(&other.head())
            .then_with(|| self.tail().cmp(&other.tail()))
    }
}

impl<H: Copy + Hash, T: Copy + Hash> Hash for Cons<H, T> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.head().hash(state);
        self.tail().hash(state);
    }
}

/// Formatting of every element of a chain with its own `Display`.
pub trait DisplayFields {
    fn fmt_fields(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result;
}

impl DisplayFields for () {
    fn fmt_fields(&self, _: &mut fmt::Formatter<'_>, _: bool) -> fmt::Result {
        Ok(())
    }
}

impl<H: Copy + fmt::Display, T: Copy + DisplayFields> DisplayFields for Cons<H, T> {
    fn fmt_fields(&self, f: &mut fmt::Formatter<'_>, first: bool) -> fmt::Result {
        if !first {
            f.write_str(" ")?;
        }
        let head = self.head;
        write!(f, "{head}")?;
        self.tail().fmt_fields(f, false)
    }
}

/// Formatting of every element of a chain with its own `Debug`.
pub trait DebugFields {
    fn debug_fields(&self, d: &mut fmt::DebugTuple<'_, '_>);
}

impl DebugFields for () {
    fn debug_fields(&self, _: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<H: Copy + fmt::Debug, T: Copy + DebugFields> DebugFields for Cons<H, T> {
    fn debug_fields(&self, d: &mut fmt::DebugTuple<'_, '_>) {
        let head = self.head;
        d.field(&head);
        self.tail().debug_fields(d);
    }
}

impl<H: Copy + fmt::Debug, T: Copy + DebugFields> fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_tuple("Cons");
        self.debug_fields(&mut d);
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Chain = Cons<u16, Cons<u8, Cons<u32, ()>>>;

    fn sample() -> Chain {
        Cons::new(1, Cons::new(2, Cons::new(3, ())))
    }

    #[test]
    fn test_no_padding() {
        assert_eq!(size_of::<Chain>(), 2 + 1 + 4);
        assert_eq!(align_of::<Chain>(), 1);
        assert_eq!(size_of::<Cons<u64, ()>>(), 8);
    }

    #[test]
    fn test_len() {
        assert_eq!(<() as List>::LEN, 0);
        assert_eq!(<Cons<u8, ()> as List>::LEN, 1);
        assert_eq!(Chain::LEN, 3);
    }

    #[test]
    fn test_field_span() {
        assert_eq!(Chain::field_span(0), Some(0..2));
        assert_eq!(Chain::field_span(1), Some(2..3));
        assert_eq!(Chain::field_span(2), Some(3..7));
        assert_eq!(Chain::field_span(3), None);
    }

    #[test]
    fn test_field_read_write() {
        let mut c = sample();
        assert_eq!(<Chain as Field<0>>::read(&c), 1);
        assert_eq!(<Chain as Field<2>>::read(&c), 3);
        <Chain as Field<2>>::write(&mut c, 30);
        <Chain as Field<1>>::write(&mut c, 20);
        assert_eq!(<Chain as Field<0>>::read(&c), 1);
        assert_eq!(<Chain as Field<1>>::read(&c), 20);
        assert_eq!(<Chain as Field<2>>::read(&c), 30);
    }

    #[test]
    fn test_lexicographic_head_first() {
        let a = sample();
        let mut b = sample();
        <Chain as Field<2>>::write(&mut b, 0);
        assert!(b < a);
        <Chain as Field<0>>::write(&mut b, 9);
        assert!(b > a);
        assert_eq!(a.cmp(&sample()), Ordering::Equal);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", sample()), "Cons(1, 2, 3)");
    }
}
