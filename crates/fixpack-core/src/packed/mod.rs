//! Heterogeneous, exactly packed, fixed-arity tuple.
//!
//! A [`PackedTuple<(T0, …, Tn)>`](PackedTuple) stores its elements in
//! declaration order with no padding at all, so its footprint is the sum
//! of the element footprints:
//!
//! ```
//! use fixpack_core::PackedTuple;
//!
//! assert_eq!(size_of::<PackedTuple<(f64, u8, i32)>>(), 8 + 1 + 4);
//! assert_eq!(size_of::<(f64, u8, i32)>(), 16);
//! ```
//!
//! Elements are unaligned in memory and are therefore never borrowed:
//! reads return copies and writes go through [`set`](PackedTuple::set)
//! or [`update`](PackedTuple::update).

#[cfg(feature = "bytemuck")]
mod bytes;
mod display;
mod list;
mod tuple;

pub use display::ListFormat;
pub use list::{Cons, DebugFields, DisplayFields, Field, List};
pub use tuple::{Prefix, Tuple};

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Range;

use crate::error::{CoreError, Result};
use crate::protocol::{Arity, ElementOf, check_index};

/// A packed tuple of `Copy` elements, described by a plain tuple type `L`.
///
/// # Type Parameters
///
/// - `L`: A tuple type such as `(f64, u8, i32)`, with 1 to 12 elements.
#[repr(transparent)]
pub struct PackedTuple<L: Tuple>(L::Packed);

impl<L: Tuple> PackedTuple<L> {
    /// Number of elements, as an associated constant.
    pub const SIZE: usize = <L::Packed as List>::LEN;

    /// Pack the elements of `values`.
    ///
    /// ```
    /// use fixpack_core::PackedTuple;
    ///
    /// let t = PackedTuple::new((1.5_f32, 'z'));
    /// assert_eq!(t.get::<1>(), 'z');
    /// ```
    #[inline]
    pub fn new(values: L) -> Self {
        Self(values.pack())
    }

    /// Pack a leading subset of the elements; the remaining positions
    /// hold their `Default` value.
    ///
    /// ```
    /// use fixpack_core::PackedTuple;
    ///
    /// let t = PackedTuple::<(u8, i64, char)>::from_prefix((9_u8,));
    /// assert_eq!(t.into_tuple(), (9, 0, '\0'));
    /// ```
    ///
    /// A prefix longer than the tuple does not type-check:
    ///
    /// ```compile_fail
    /// use fixpack_core::PackedTuple;
    ///
    /// let t = PackedTuple::<(u8, u16)>::from_prefix((1_u8, 2_u16, 3_u32));
    /// ```
    #[inline]
    pub fn from_prefix<P: Prefix<L>>(prefix: P) -> Self {
        Self::new(prefix.fill())
    }

    /// Unpack into a plain tuple.
    ///
    /// ```
    /// use fixpack_core::PackedTuple;
    ///
    /// let (x, c, n) = PackedTuple::new((3.14, 'c', 42)).into_tuple();
    /// assert_eq!((c, n), ('c', 42));
    /// assert!((x - 3.14_f64).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn into_tuple(self) -> L {
        L::unpack(self.0)
    }

    /// The number of elements.
    #[inline]
    pub const fn size(&self) -> usize {
        Self::SIZE
    }

    /// Element `I`, by value.
    ///
    /// Only positions below the arity exist:
    ///
    /// ```compile_fail
    /// use fixpack_core::PackedTuple;
    ///
    /// let t = PackedTuple::new((1_u8, 2_u16, 3_u32));
    /// let _ = t.get::<3>();
    /// ```
    ///
    /// A single-element tuple only answers position 0:
    ///
    /// ```compile_fail
    /// use fixpack_core::PackedTuple;
    ///
    /// let t = PackedTuple::new((1_u8,));
    /// let _ = t.get::<1>();
    /// ```
    #[inline]
    pub fn get<const I: usize>(&self) -> <L::Packed as Field<I>>::Type
    where
        L::Packed: Field<I>,
    {
        <L::Packed as Field<I>>::read(&self.0)
    }

    /// Overwrite element `I`.
    #[inline]
    pub fn set<const I: usize>(&mut self, value: <L::Packed as Field<I>>::Type) -> &mut Self
    where
        L::Packed: Field<I>,
    {
        <L::Packed as Field<I>>::write(&mut self.0, value);
        self
    }

    /// Replace element `I` with `f(element)`.
    ///
    /// ```
    /// use fixpack_core::PackedTuple;
    ///
    /// let mut t = PackedTuple::new((1_u8, 10_u32));
    /// t.update::<1>(|n| n * 3).update::<0>(|b| b + 1);
    /// assert_eq!(t.into_tuple(), (2, 30));
    /// ```
    #[inline]
    pub fn update<const I: usize>(
        &mut self,
        f: impl FnOnce(<L::Packed as Field<I>>::Type) -> <L::Packed as Field<I>>::Type,
    ) -> &mut Self
    where
        L::Packed: Field<I>,
    {
        let value = f(<L::Packed as Field<I>>::read(&self.0));
        <L::Packed as Field<I>>::write(&mut self.0, value);
        self
    }

    /// Byte range of element `i` inside the packed layout, or an error
    /// when `i < 0` or `i >= size()`.
    ///
    /// ```
    /// use fixpack_core::PackedTuple;
    ///
    /// let t = PackedTuple::new((1.0_f64, 2_u8, 3_i32));
    /// assert_eq!(t.span_at(1), Ok(8..9));
    /// assert_eq!(t.span_at(2), Ok(9..13));
    /// assert!(t.span_at(3).is_err());
    /// ```
    pub fn span_at(&self, i: isize) -> Result<Range<usize>> {
        let index = check_index(i, Self::SIZE)?;
        <L::Packed as List>::field_span(index).ok_or(CoreError::IndexOutOfRange {
            index: i,
            size: Self::SIZE,
        })
    }
}

// ======================================================================
// Value semantics
// ======================================================================

impl<L: Tuple> Clone for PackedTuple<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Tuple> Copy for PackedTuple<L> {}

impl<L: Tuple> Default for PackedTuple<L>
where
    L::Packed: Default,
{
    fn default() -> Self {
        Self(L::Packed::default())
    }
}

impl<L: Tuple> From<L> for PackedTuple<L> {
    fn from(values: L) -> Self {
        Self::new(values)
    }
}

// ======================================================================
// Reflection
// ======================================================================

impl<L: Tuple> Arity for PackedTuple<L> {
    const ARITY: usize = <L::Packed as List>::LEN;
}

impl<L: Tuple, const I: usize> ElementOf<I> for PackedTuple<L>
where
    L::Packed: Field<I>,
{
    type Type = <L::Packed as Field<I>>::Type;
}

// ======================================================================
// Comparison and hashing, element by element from position 0
// ======================================================================

impl<L: Tuple> PartialEq for PackedTuple<L>
where
    L::Packed: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<L: Tuple> Eq for PackedTuple<L> where L::Packed: Eq {}

impl<L: Tuple> PartialOrd for PackedTuple<L>
where
    L::Packed: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<L: Tuple> Ord for PackedTuple<L>
where
    L::Packed: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<L: Tuple> Hash for PackedTuple<L>
where
    L::Packed: Hash,
{
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.0.hash(state);
    }
}

impl<L: Tuple> fmt::Debug for PackedTuple<L>
where
    L::Packed: DebugFields,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_tuple("PackedTuple");
        self.0.debug_fields(&mut d);
        d.finish()
    }
}
